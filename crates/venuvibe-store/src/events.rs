//! CRUD operations for [`Event`] records.

use chrono::Utc;
use tracing::{debug, info};

use venuvibe_shared::dates::parse_date;
use venuvibe_shared::{EventId, UserId};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{Event, NewEvent};

fn validate(title: &str, date: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation("Event title is required".into()));
    }
    if parse_date(date).is_none() {
        return Err(StoreError::Validation(format!(
            "Event date '{date}' is not a valid date"
        )));
    }
    Ok(())
}

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Store a new event, assigning its id and creation timestamp.
    pub fn create_event(&self, new: NewEvent) -> Result<Event> {
        validate(&new.title, &new.date)?;

        let event = Event {
            id: EventId::generate(),
            created_at: Utc::now(),
            title: new.title,
            description: new.description,
            date: new.date,
            location: new.location,
            user_id: new.user_id,
            template_id: new.template_id,
            banner_image: new.banner_image,
            status: new.status,
        };

        let event = self.insert_record(event)?;
        info!(event_id = %event.id, user_id = %event.user_id, "event created");
        Ok(event)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Every event owned by `user_id`, in the order they were created.
    pub fn list_events_for_user(&self, user_id: &UserId) -> Result<Vec<Event>> {
        let events = self.select_records(|e: &Event| &e.user_id == user_id)?;
        debug!(user_id = %user_id, count = events.len(), "listed events");
        Ok(events)
    }

    pub fn get_event(&self, id: &EventId) -> Result<Event> {
        self.find_record(id.as_str())
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the stored event with the same id. The whole record is
    /// overwritten; fields are not merged. Title and date are checked as on
    /// create.
    pub fn update_event(&self, event: Event) -> Result<Event> {
        validate(&event.title, &event.date)?;
        let event = self.replace_record(event)?;
        info!(event_id = %event.id, "event updated");
        Ok(event)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete an event. Deleting an unknown id does nothing. Guests, tasks
    /// and budget items of the event are left in place.
    pub fn delete_event(&self, id: &EventId) -> Result<()> {
        let removed = self.remove_record::<Event>(id.as_str())?;
        info!(event_id = %id, removed, "event deleted");
        Ok(())
    }
}
