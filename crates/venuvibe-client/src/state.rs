//! Application state shared by every [`AppContext`](crate::AppContext) clone.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use venuvibe_store::{Database, User};

/// The signed-in user, as seen by this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    /// When this process picked up the session (sign-in, sign-up or restore).
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }
}

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Repository handle.
    pub database: Arc<Database>,

    /// `None` while anonymous.
    pub session: Option<Session>,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self {
            database: Arc::new(database),
            session: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
