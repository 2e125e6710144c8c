//! CRUD operations for [`Guest`] records.

use tracing::info;

use venuvibe_shared::constants::MAX_PLUS_ONES;
use venuvibe_shared::{EventId, GuestId, RsvpStatus};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{Guest, NewGuest};

fn validate(name: &str, email: &str, plus_ones: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("Guest name is required".into()));
    }
    if !email.contains('@') {
        return Err(StoreError::Validation(format!(
            "Guest email '{email}' is not valid"
        )));
    }
    if plus_ones > MAX_PLUS_ONES {
        return Err(StoreError::Validation(format!(
            "A guest may bring at most {MAX_PLUS_ONES} plus-ones"
        )));
    }
    Ok(())
}

impl Database {
    /// Add a guest to an existing event.
    pub fn create_guest(&self, new: NewGuest) -> Result<Guest> {
        validate(&new.name, &new.email, new.plus_ones)?;
        self.get_event(&new.event_id)?;

        let guest = Guest {
            id: GuestId::generate(),
            event_id: new.event_id,
            name: new.name.trim().to_string(),
            email: new.email.trim().to_string(),
            phone: new.phone,
            rsvp_status: new.rsvp_status,
            plus_ones: new.plus_ones,
            dietary_restrictions: new.dietary_restrictions,
            notes: new.notes,
        };

        let guest = self.insert_record(guest)?;
        info!(guest_id = %guest.id, event_id = %guest.event_id, "guest added");
        Ok(guest)
    }

    pub fn list_guests_for_event(&self, event_id: &EventId) -> Result<Vec<Guest>> {
        self.select_records(|g: &Guest| &g.event_id == event_id)
    }

    pub fn update_guest(&self, guest: Guest) -> Result<Guest> {
        validate(&guest.name, &guest.email, guest.plus_ones)?;
        let guest = self.replace_record(guest)?;
        info!(guest_id = %guest.id, "guest updated");
        Ok(guest)
    }

    /// Record a guest's RSVP answer and return the new version.
    pub fn set_rsvp_status(&self, id: &GuestId, status: RsvpStatus) -> Result<Guest> {
        let guest = self.modify_record(id.as_str(), |g: &mut Guest| g.rsvp_status = status)?;
        info!(guest_id = %guest.id, status = %status, "RSVP updated");
        Ok(guest)
    }

    pub fn delete_guest(&self, id: &GuestId) -> Result<()> {
        let removed = self.remove_record::<Guest>(id.as_str())?;
        info!(guest_id = %id, removed, "guest deleted");
        Ok(())
    }
}
