//! Process-wide session context.
//!
//! Replaces the ambient browser-local session store with an explicit owned
//! context: load once at startup, mutate through `login`/`logout`, observe
//! changes through a broadcast channel (the cross-tab notification, expressed
//! as message passing).

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AnalysisError;

/// Account roles, with the backend's numeric codes preserved for interchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Candidate,
    Employer,
}

impl Role {
    pub fn code(self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Candidate => 1,
            Role::Employer => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Role::Admin),
            1 => Some(Role::Candidate),
            2 => Some(Role::Employer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Broadcast to every subscriber on a session transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Updated(Session),
    Cleared,
}

pub struct SessionContext {
    path: PathBuf,
    current: RwLock<Option<Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionContext {
    /// Init transition: read the persisted session if one exists. A missing
    /// file means "not logged in", not an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AnalysisError> {
        let path = path.into();
        let current = match std::fs::read_to_string(&path) {
            Ok(raw) => Some(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(AnalysisError::Session(format!(
                    "cannot read session file {}: {e}",
                    path.display()
                )))
            }
        };

        debug!(
            "Session context loaded ({})",
            if current.is_some() { "logged in" } else { "anonymous" }
        );

        let (events, _) = broadcast::channel(16);
        Ok(Self {
            path,
            current: RwLock::new(current),
            events,
        })
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().expect("session lock poisoned").clone()
    }

    /// Persists the session and notifies subscribers.
    pub fn login(&self, session: Session) -> Result<(), AnalysisError> {
        let raw = serde_json::to_string_pretty(&session)?;
        write_session_file(&self.path, &raw)?;
        *self.current.write().expect("session lock poisoned") = Some(session.clone());
        let _ = self.events.send(SessionEvent::Updated(session));
        Ok(())
    }

    /// Teardown transition: clear the persisted session and broadcast.
    pub fn logout(&self) -> Result<(), AnalysisError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AnalysisError::Session(format!(
                    "cannot remove session file {}: {e}",
                    self.path.display()
                )))
            }
        }
        *self.current.write().expect("session lock poisoned") = None;
        let _ = self.events.send(SessionEvent::Cleared);
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

fn write_session_file(path: &Path, raw: &str) -> Result<(), AnalysisError> {
    std::fs::write(path, raw)
        .map_err(|e| AnalysisError::Session(format!("cannot write session file: {e}")))
}
