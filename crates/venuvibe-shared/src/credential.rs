//! Salted password credentials.
//!
//! The hash is BLAKE3 in key-derivation mode over `salt || password`. This is
//! a local convenience check, not a memory-hard password KDF.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::constants::{KDF_CONTEXT_PASSWORD, SALT_SIZE};
use crate::error::CredentialError;

/// A stored password hash and its salt, both hex-encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordCredential {
    pub salt: String,
    pub hash: String,
}

impl PasswordCredential {
    /// Hash `password` under a freshly generated salt.
    pub fn derive(password: &str) -> Self {
        let mut salt = [0u8; SALT_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        let hash = hash_password(&salt, password);
        Self {
            salt: hex::encode(salt),
            hash: hex::encode(hash),
        }
    }

    /// Check `password` against this credential in constant time.
    pub fn verify(&self, password: &str) -> Result<bool, CredentialError> {
        let salt = hex::decode(&self.salt)?;
        if salt.len() != SALT_SIZE {
            return Err(CredentialError::Length {
                expected: SALT_SIZE,
                actual: salt.len(),
            });
        }
        let expected = hex::decode(&self.hash)?;
        if expected.len() != 32 {
            return Err(CredentialError::Length {
                expected: 32,
                actual: expected.len(),
            });
        }

        let actual = hash_password(&salt, password);
        Ok(actual[..].ct_eq(&expected[..]).unwrap_u8() == 1)
    }
}

fn hash_password(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new_derive_key(KDF_CONTEXT_PASSWORD);
    hasher.update(salt);
    hasher.update(password.as_bytes());
    *hasher.finalize().as_bytes()
}
