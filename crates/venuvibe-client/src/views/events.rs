use venuvibe_shared::{EventId, EventStatus};
use venuvibe_store::Event;

use super::filter::matches_search;

/// The signed-in user's events with title/location search and a status filter.
#[derive(Debug, Clone, Default)]
pub struct EventListView {
    events: Vec<Event>,
    pub search: String,
    pub status: Option<EventStatus>,
}

impl EventListView {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn visible(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| {
                matches_search(&self.search, &[Some(e.title.as_str()), e.location.as_deref()])
            })
            .filter(|e| self.status.map_or(true, |s| e.status == s))
            .collect()
    }

    /// Detail lookup, ignoring the filters.
    pub fn find(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn remove(&mut self, id: &EventId) -> Option<Event> {
        let pos = self.events.iter().position(|e| &e.id == id)?;
        Some(self.events.remove(pos))
    }
}
