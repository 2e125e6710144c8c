use thiserror::Error;

use venuvibe_shared::EventId;
use venuvibe_store::StoreError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No user is signed in")]
    NotAuthenticated,

    #[error("Event {0} belongs to another user")]
    NotOwner(EventId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
