//! Job-listing view model for the browse-jobs surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::skills::parse_required_skills;

/// A job description row as returned by the backend's `GET /user/jd`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdRow {
    pub id: i64,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_overview: String,
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// What the display layer shows per job. Fields the backend does not carry
/// get fixed placeholder values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_at: String,
}

impl JobListing {
    pub fn from_row(row: &JdRow, now: DateTime<Utc>) -> Self {
        Self {
            id: row.id.to_string(),
            title: row.job_title.clone(),
            description: row.job_overview.clone(),
            skills: parse_required_skills(&row.required_skills),
            posted_at: row
                .created_at
                .map(|d| format_time_ago(d, now))
                .unwrap_or_else(|| "Recently".to_string()),
            company: "TalentSync Partner".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            salary: "Competitive Salary".to_string(),
        }
    }
}

/// Formats a timestamp as "X <unit>s ago" relative to `now`.
pub fn format_time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();
    if seconds < 0 {
        return "Recently".to_string();
    }

    const UNITS: [(i64, &str); 5] = [
        (31_536_000, "year"),
        (2_592_000, "month"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
    ];

    for (unit_seconds, label) in UNITS {
        if seconds > unit_seconds {
            let count = seconds / unit_seconds;
            return format!("{count} {label}{} ago", plural(count));
        }
    }
    format!("{seconds} second{} ago", plural(seconds))
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
