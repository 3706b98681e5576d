use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bytes::Bytes;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use talentsync_analyzer::analyzer::Analyzer;
use talentsync_analyzer::client::{HttpBackendClient, HttpParserClient};
use talentsync_analyzer::config::Config;
use talentsync_analyzer::matching::{MatchScorer, RecommendationBuilder, ValidationMode};
use talentsync_analyzer::models::JobListing;
use talentsync_analyzer::session::SessionContext;

#[derive(Parser)]
#[command(name = "talentsync", about = "TalentSync CV analysis engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a CV document and print the role recommendations.
    Analyze {
        /// Path to a PDF, DOC, or DOCX file.
        file: PathBuf,
        /// Candidate user id; defaults to the logged-in session, then random.
        #[arg(long)]
        user_id: Option<Uuid>,
        /// Print the full report as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// List open job descriptions from the backend.
    Jobs,
    /// Clear the persisted session.
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("TalentSync analyzer v{}", env!("CARGO_PKG_VERSION"));

    let session = SessionContext::load(&config.session_file)?;

    match Cli::parse().command {
        Command::Analyze {
            file,
            user_id,
            json,
        } => analyze(&config, &session, file, user_id, json).await,
        Command::Jobs => list_jobs(&config).await,
        Command::Logout => {
            session.logout()?;
            println!("Session cleared.");
            Ok(())
        }
    }
}

async fn analyze(
    config: &Config,
    session: &SessionContext,
    file: PathBuf,
    user_id: Option<Uuid>,
    json: bool,
) -> Result<()> {
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .context("file path has no usable file name")?
        .to_string();

    let content = tokio::fs::read(&file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;

    let mode = if config.strict_skill_validation {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    let parser = Arc::new(HttpParserClient::new(config.parser_service_url.clone())?);
    let store = Arc::new(HttpBackendClient::new(config.backend_url.clone())?);
    let analyzer = Analyzer::new(
        parser,
        store,
        RecommendationBuilder::new(MatchScorer::new(mode)),
    );

    let user_id = user_id
        .or_else(|| session.current().map(|s| s.user_id))
        .unwrap_or_else(Uuid::new_v4);

    let report = analyzer
        .analyze(&file_name, Bytes::from(content), user_id)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Analysis complete for {}", report.name);
    println!("Experience: {}", report.experience_summary);
    println!("Skills: {}", report.skills.join(", "));
    println!();
    for role in &report.suggested_roles {
        let gap = if role.has_experience_gap { " [GAP]" } else { "" };
        println!(
            "{:>3}%  {}  ({} / {} yrs){}",
            role.match_percentage, role.title, role.candidate_years, role.required_years, gap
        );
        if !role.required_skills.is_empty() {
            println!("      requires: {}", role.required_skills.join(", "));
        }
    }
    if !report.gap_analysis.improvements.is_empty() {
        println!();
        println!(
            "Growth areas: {}",
            report.gap_analysis.improvements.join(", ")
        );
    }
    Ok(())
}

async fn list_jobs(config: &Config) -> Result<()> {
    let backend = HttpBackendClient::new(config.backend_url.clone())?;
    let rows = backend.fetch_job_listings().await?;

    if rows.is_empty() {
        println!("No open roles right now.");
        return Ok(());
    }

    let now = Utc::now();
    for listing in rows.iter().map(|row| JobListing::from_row(row, now)) {
        println!(
            "#{}  {}  ({}, {}, posted {})",
            listing.id, listing.title, listing.location, listing.job_type, listing.posted_at
        );
        if !listing.skills.is_empty() {
            println!("      skills: {}", listing.skills.join(", "));
        }
    }
    Ok(())
}
