use venuvibe_shared::{GuestId, RsvpStatus};
use venuvibe_store::Guest;

use super::filter::matches_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsvpCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub declined: usize,
}

/// Guest list with name/email search and an RSVP filter.
#[derive(Debug, Clone, Default)]
pub struct GuestListView {
    guests: Vec<Guest>,
    pub search: String,
    pub status: Option<RsvpStatus>,
}

impl GuestListView {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self {
            guests,
            ..Self::default()
        }
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn visible(&self) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|g| {
                matches_search(&self.search, &[Some(g.name.as_str()), Some(g.email.as_str())])
            })
            .filter(|g| self.status.map_or(true, |s| g.rsvp_status == s))
            .collect()
    }

    /// Guests plus their plus-ones, over the filtered list.
    pub fn headcount(&self) -> u32 {
        self.visible()
            .iter()
            .fold(0u32, |acc, g| acc.saturating_add(g.headcount()))
    }

    /// RSVP counts over the filtered list.
    pub fn counts(&self) -> RsvpCounts {
        let mut counts = RsvpCounts::default();
        for guest in self.visible() {
            match guest.rsvp_status {
                RsvpStatus::Pending => counts.pending += 1,
                RsvpStatus::Confirmed => counts.confirmed += 1,
                RsvpStatus::Declined => counts.declined += 1,
            }
        }
        counts
    }

    pub fn set_rsvp(&mut self, id: &GuestId, status: RsvpStatus) -> Option<Guest> {
        let guest = self.guests.iter_mut().find(|g| &g.id == id)?;
        guest.rsvp_status = status;
        Some(guest.clone())
    }

    pub fn remove(&mut self, id: &GuestId) -> Option<Guest> {
        let pos = self.guests.iter().position(|g| &g.id == id)?;
        Some(self.guests.remove(pos))
    }
}
