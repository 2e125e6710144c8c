//! Users and the session pointer: sign-up, sign-in, sign-out and the
//! current-user lookup.
//!
//! Registered users live in the `venuvibe_users` collection, their password
//! hashes in `venuvibe_credentials`, and the signed-in user is copied to
//! `venuvibe_user`. The session pointer is a single JSON object, not a
//! collection.

use tracing::{debug, info, warn};

use venuvibe_shared::constants::{KEY_CREDENTIALS, KEY_CURRENT_USER, KEY_USERS};
use venuvibe_shared::{PasswordCredential, UserId};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{StoredCredential, User};

/// Reject blank input before the store is touched.
fn require_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(StoreError::Validation(
            "Email and password are required".into(),
        ));
    }
    Ok(())
}

impl Database {
    /// Register a new user and make them the current user.
    pub fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        require_credentials(email, password)?;
        let email = email.trim();

        let _guard = self.write_lock()?;
        let mut users: Vec<User> = self.all_records()?;
        if users.iter().any(|u| u.email == email) {
            warn!(email, "sign-up rejected: email already registered");
            return Err(StoreError::Conflict("User already exists".into()));
        }
        let mut credentials: Vec<StoredCredential> = self.all_records()?;

        let user = User {
            id: UserId::generate(),
            email: email.to_string(),
            full_name: None,
            avatar_url: None,
        };
        credentials.push(StoredCredential {
            user_id: user.id.clone(),
            credential: PasswordCredential::derive(password),
        });
        users.push(user.clone());

        // Credential first: a user record must never exist without one.
        let previous_credentials = self.store().get(KEY_CREDENTIALS)?;
        self.save_value(KEY_CREDENTIALS, &credentials)?;

        let previous_users = self.store().get(KEY_USERS)?;
        if let Err(e) = self.save_value(KEY_USERS, &users) {
            self.restore_raw(KEY_CREDENTIALS, previous_credentials);
            return Err(e);
        }
        if let Err(e) = self.save_value(KEY_CURRENT_USER, &user) {
            self.restore_raw(KEY_USERS, previous_users);
            self.restore_raw(KEY_CREDENTIALS, previous_credentials);
            return Err(e);
        }

        info!(user_id = %user.id, "user signed up");
        Ok(user)
    }

    /// Put back a raw value captured before a failed multi-key write.
    fn restore_raw(&self, key: &str, previous: Option<String>) {
        let result = match previous {
            Some(raw) => self.store().set(key, &raw),
            None => self.store().remove(key),
        };
        if let Err(e) = result {
            warn!(key, error = %e, "rollback failed");
        }
    }

    /// Verify `email` / `password` and make that user current.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        require_credentials(email, password)?;
        let email = email.trim();

        let _guard = self.write_lock()?;
        let users: Vec<User> = self.all_records()?;
        let Some(user) = users.into_iter().find(|u| u.email == email) else {
            debug!(email, "sign-in failed: unknown email");
            return Err(StoreError::InvalidCredentials);
        };

        let credentials: Vec<StoredCredential> = self.all_records()?;
        let Some(stored) = credentials.iter().find(|c| c.user_id == user.id) else {
            warn!(user_id = %user.id, "sign-in failed: no stored credential");
            return Err(StoreError::InvalidCredentials);
        };
        if !stored.credential.verify(password)? {
            debug!(user_id = %user.id, "sign-in failed: wrong password");
            return Err(StoreError::InvalidCredentials);
        }

        self.save_value(KEY_CURRENT_USER, &user)?;
        info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    /// Clear the current user. Signing out twice is fine.
    pub fn sign_out(&self) -> Result<()> {
        let _guard = self.write_lock()?;
        self.store().remove(KEY_CURRENT_USER)?;
        info!("user signed out");
        Ok(())
    }

    /// The signed-in user, or `None`. A malformed stored value is an error.
    pub fn current_user(&self) -> Result<Option<User>> {
        self.load_value(KEY_CURRENT_USER)
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.all_records()
    }

    /// Replace a user's display name and avatar. The session copy is
    /// refreshed when it points at the same user.
    pub fn update_user_profile(
        &self,
        user_id: &UserId,
        full_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<User> {
        let full_name = full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let _guard = self.write_lock()?;
        let mut users: Vec<User> = self.all_records()?;
        let user = users
            .iter_mut()
            .find(|u| &u.id == user_id)
            .ok_or_else(|| StoreError::not_found("User", user_id.as_str()))?;
        user.full_name = full_name;
        user.avatar_url = avatar_url;
        let updated = user.clone();

        self.save_value(KEY_USERS, &users)?;
        if matches!(self.current_user()?, Some(current) if current.id == updated.id) {
            self.save_value(KEY_CURRENT_USER, &updated)?;
        }

        info!(user_id = %updated.id, "profile updated");
        Ok(updated)
    }
}
