//! # venuvibe-shared
//!
//! Types shared by the VenuVibe store and client crates: record identifiers,
//! closed status enumerations, storage key constants, event date parsing and
//! password credentials.

pub mod constants;
pub mod credential;
pub mod dates;
pub mod error;
pub mod status;
pub mod types;

pub use credential::PasswordCredential;
pub use error::{CredentialError, ParseStatusError};
pub use status::{EventStatus, RsvpStatus, TaskPriority, TaskStatus};
pub use types::{generate_id, BudgetItemId, EventId, GuestId, TaskId, UserId, VendorId};
