use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use venuvibe_shared::constants::{KEY_CREDENTIALS, KEY_USERS};

use crate::collection::Record;
use crate::database::Database;
use crate::error::Result;
use crate::models::{BudgetItem, Event, Guest, StoredCredential, Task, User, Vendor};

/// Full backup payload. Password hashes travel with their users so restored
/// accounts can sign in; the session pointer is never included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupPayload {
    /// ISO 8601 timestamp of when the backup was created
    pub created_at: String,
    /// App version that produced the backup
    pub version: String,
    #[serde(default)]
    pub users: Vec<User>,
    /// Salted password hashes, keyed by user id
    #[serde(default)]
    pub credentials: Vec<StoredCredential>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    pub users_imported: usize,
    /// Users left out because their email is already registered under
    /// another id, or because the backup holds no credential for them.
    #[serde(default)]
    pub users_skipped: usize,
    pub events_imported: usize,
    pub guests_imported: usize,
    pub vendors_imported: usize,
    pub budget_items_imported: usize,
    pub tasks_imported: usize,
}

impl Database {
    /// Export every collection into a serializable struct.
    pub fn export_backup(&self) -> Result<BackupPayload> {
        Ok(BackupPayload {
            created_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            users: self.all_records()?,
            credentials: self.all_records()?,
            events: self.all_records()?,
            guests: self.all_records()?,
            vendors: self.all_records()?,
            budget_items: self.all_records()?,
            tasks: self.all_records()?,
        })
    }

    /// Import a backup payload, merging with existing data. Records whose id
    /// already exists are skipped, never overwritten.
    pub fn import_backup(&self, payload: &BackupPayload) -> Result<ImportStats> {
        let (users_imported, users_skipped) =
            self.merge_users(&payload.users, &payload.credentials)?;
        let stats = ImportStats {
            users_imported,
            users_skipped,
            events_imported: self.merge_records(&payload.events)?,
            guests_imported: self.merge_records(&payload.guests)?,
            vendors_imported: self.merge_records(&payload.vendors)?,
            budget_items_imported: self.merge_records(&payload.budget_items)?,
            tasks_imported: self.merge_records(&payload.tasks)?,
        };
        info!(?stats, backup_version = %payload.version, "backup imported");
        Ok(stats)
    }

    /// Merge users together with their credentials. An incoming user is
    /// added only when neither its id nor its email is taken and a
    /// credential for it is available. Returns `(imported, skipped)`.
    fn merge_users(
        &self,
        incoming: &[User],
        incoming_credentials: &[StoredCredential],
    ) -> Result<(usize, usize)> {
        let _guard = self.write_lock()?;
        let mut users: Vec<User> = self.all_records()?;
        let mut credentials: Vec<StoredCredential> = self.all_records()?;

        let mut ids: HashSet<String> = users.iter().map(|u| u.id.to_string()).collect();
        let mut emails: HashSet<String> = users.iter().map(|u| u.email.clone()).collect();
        let (mut imported, mut skipped) = (0, 0);

        for user in incoming {
            if ids.contains(user.id.as_str()) {
                continue;
            }
            if emails.contains(&user.email) {
                warn!(user_id = %user.id, "backup user skipped: email already registered");
                skipped += 1;
                continue;
            }
            let has_stored = credentials.iter().any(|c| c.user_id == user.id);
            if !has_stored {
                let Some(credential) =
                    incoming_credentials.iter().find(|c| c.user_id == user.id)
                else {
                    warn!(user_id = %user.id, "backup user skipped: no credential");
                    skipped += 1;
                    continue;
                };
                credentials.push(credential.clone());
            }

            ids.insert(user.id.to_string());
            emails.insert(user.email.clone());
            users.push(user.clone());
            imported += 1;
        }

        if imported > 0 {
            let previous_credentials = self.store().get(KEY_CREDENTIALS)?;
            self.save_value(KEY_CREDENTIALS, &credentials)?;
            if let Err(e) = self.save_value(KEY_USERS, &users) {
                match previous_credentials {
                    Some(raw) => self.store().set(KEY_CREDENTIALS, &raw)?,
                    None => self.store().remove(KEY_CREDENTIALS)?,
                }
                return Err(e);
            }
        }
        Ok((imported, skipped))
    }

    fn merge_records<T: Record>(&self, incoming: &[T]) -> Result<usize> {
        let _guard = self.write_lock()?;
        let mut records: Vec<T> = self.all_records()?;
        let mut seen: HashSet<String> = records.iter().map(|r| r.record_id().to_string()).collect();

        let before = records.len();
        for record in incoming {
            if seen.insert(record.record_id().to_string()) {
                records.push(record.clone());
            }
        }

        let imported = records.len() - before;
        if imported > 0 {
            self.save_value(T::KEY, &records)?;
        }
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use venuvibe_shared::UserId;

    use super::*;
    use crate::error::StoreError;
    use crate::models::{NewEvent, NewGuest};

    #[test]
    fn export_then_import_into_empty_database() {
        let source = Database::in_memory();
        let user = source.sign_up("a@x.com", "pw").unwrap();
        let event = source
            .create_event(NewEvent::new("Gala", "2025-10-10", user.id.clone()))
            .unwrap();
        source
            .create_guest(NewGuest::new(event.id.clone(), "John", "john@example.com"))
            .unwrap();

        let payload = source.export_backup().unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("\"pw\""));

        let target = Database::in_memory();
        let stats = target.import_backup(&serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(stats.users_imported, 1);
        assert_eq!(stats.users_skipped, 0);
        assert_eq!(stats.events_imported, 1);
        assert_eq!(stats.guests_imported, 1);
        assert_eq!(target.list_events_for_user(&user.id).unwrap(), vec![event]);
        assert_eq!(target.current_user().unwrap(), None);

        // The restored account keeps its password.
        assert_eq!(target.sign_in("a@x.com", "pw").unwrap().id, user.id);
        assert!(matches!(
            target.sign_in("a@x.com", "wrong"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn import_skips_users_whose_email_is_taken() {
        let source = Database::in_memory();
        source.sign_up("a@x.com", "old-pw").unwrap();
        let payload = source.export_backup().unwrap();

        let target = Database::in_memory();
        let local = target.sign_up("a@x.com", "new-pw").unwrap();

        let stats = target.import_backup(&payload).unwrap();
        assert_eq!(stats.users_imported, 0);
        assert_eq!(stats.users_skipped, 1);
        assert_eq!(target.list_users().unwrap(), vec![local.clone()]);
        assert_eq!(target.sign_in("a@x.com", "new-pw").unwrap().id, local.id);
    }

    #[test]
    fn import_skips_users_without_credentials() {
        let source = Database::in_memory();
        source.sign_up("a@x.com", "pw").unwrap();
        let mut payload = source.export_backup().unwrap();
        payload.credentials.clear();

        let target = Database::in_memory();
        let stats = target.import_backup(&payload).unwrap();
        assert_eq!(stats.users_imported, 0);
        assert_eq!(stats.users_skipped, 1);
        assert!(target.list_users().unwrap().is_empty());
        assert_eq!(target.sign_up("a@x.com", "pw").unwrap().email, "a@x.com");
    }

    #[test]
    fn import_skips_existing_ids() {
        let db = Database::in_memory();
        let event = db
            .create_event(NewEvent::new("Gala", "2025-10-10", UserId::from("u1")))
            .unwrap();
        let payload = db.export_backup().unwrap();

        let mut renamed = payload.clone();
        renamed.events[0].title = "Overwritten?".into();

        let stats = db.import_backup(&renamed).unwrap();
        assert_eq!(stats, ImportStats::default());
        assert_eq!(db.get_event(&event.id).unwrap().title, "Gala");
    }
}
