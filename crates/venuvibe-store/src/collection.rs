//! Whole-collection JSON persistence shared by every entity.
//!
//! A collection is a JSON array stored under one key. An absent key reads as
//! an empty collection; a value that fails to decode is reported as
//! [`StoreError::Corrupt`] and never replaced by an empty one.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::{Result, StoreError};

/// A record persisted in a keyed collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key of the collection.
    const KEY: &'static str;
    /// Human-readable entity name used in errors and logs.
    const ENTITY: &'static str;

    fn record_id(&self) -> &str;
}

impl Database {
    // ------------------------------------------------------------------
    // Raw values
    // ------------------------------------------------------------------

    pub(crate) fn load_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store().get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    pub(crate) fn save_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store().set(key, &json)
    }

    pub(crate) fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self.load_value(key)?.unwrap_or_default())
    }

    // ------------------------------------------------------------------
    // Typed records
    // ------------------------------------------------------------------

    /// Every record of the collection, in storage order.
    pub(crate) fn all_records<T: Record>(&self) -> Result<Vec<T>> {
        self.load_collection(T::KEY)
    }

    /// Records matching `pred`, in storage order.
    pub(crate) fn select_records<T: Record>(&self, pred: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        let mut records: Vec<T> = self.all_records()?;
        records.retain(|r| pred(r));
        Ok(records)
    }

    pub(crate) fn find_record<T: Record>(&self, id: &str) -> Result<T> {
        self.all_records::<T>()?
            .into_iter()
            .find(|r| r.record_id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))
    }

    /// Append `record` and persist the collection.
    pub(crate) fn insert_record<T: Record>(&self, record: T) -> Result<T> {
        let _guard = self.write_lock()?;
        let mut records: Vec<T> = self.all_records()?;
        records.push(record.clone());
        self.save_value(T::KEY, &records)?;
        Ok(record)
    }

    /// Overwrite the record with the same id in place.
    ///
    /// Fails with [`StoreError::NotFound`] without writing anything if no
    /// record has that id.
    pub(crate) fn replace_record<T: Record>(&self, record: T) -> Result<T> {
        let _guard = self.write_lock()?;
        let mut records: Vec<T> = self.all_records()?;
        let slot = records
            .iter_mut()
            .find(|r| r.record_id() == record.record_id())
            .ok_or_else(|| StoreError::not_found(T::ENTITY, record.record_id()))?;
        *slot = record.clone();
        self.save_value(T::KEY, &records)?;
        Ok(record)
    }

    /// Apply `f` to the record with `id` and persist the new version.
    pub(crate) fn modify_record<T: Record>(&self, id: &str, f: impl FnOnce(&mut T)) -> Result<T> {
        let _guard = self.write_lock()?;
        let mut records: Vec<T> = self.all_records()?;
        let slot = records
            .iter_mut()
            .find(|r| r.record_id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;
        f(slot);
        let updated = slot.clone();
        self.save_value(T::KEY, &records)?;
        Ok(updated)
    }

    /// Remove every record with `id`. Returns how many were removed; when
    /// nothing matched the stored value is left untouched.
    pub(crate) fn remove_record<T: Record>(&self, id: &str) -> Result<usize> {
        let _guard = self.write_lock()?;
        let mut records: Vec<T> = self.all_records()?;
        let before = records.len();
        records.retain(|r| r.record_id() != id);
        let removed = before - records.len();
        if removed > 0 {
            self.save_value(T::KEY, &records)?;
        }
        Ok(removed)
    }
}
