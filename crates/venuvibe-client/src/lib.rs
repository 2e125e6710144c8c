//! # venuvibe-client
//!
//! Application layer for VenuVibe: configuration, logging, the explicit
//! session held by [`AppContext`], and the view-state controllers that
//! derive filtered, sorted and aggregated lists from repository data.

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod state;
pub mod views;

pub use config::{ClientConfig, StorageBackend};
pub use context::{AppContext, EventDetails};
pub use error::{ClientError, Result};
pub use state::{AppState, Session};
