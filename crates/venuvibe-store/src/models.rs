//! Domain model structs persisted in the key-value store.
//!
//! Every struct derives `Serialize` and `Deserialize`; field names are the
//! on-disk JSON names. Optional fields are omitted when empty and accept
//! `null` when read.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use venuvibe_shared::constants::{
    KEY_BUDGET_ITEMS, KEY_CREDENTIALS, KEY_EVENTS, KEY_GUESTS, KEY_TASKS, KEY_USERS, KEY_VENDORS,
};
use venuvibe_shared::dates::parse_date;
use venuvibe_shared::{
    BudgetItemId, EventId, EventStatus, GuestId, PasswordCredential, RsvpStatus, TaskId,
    TaskPriority, TaskStatus, UserId, VendorId,
};

use crate::collection::Record;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Unique among registered users (exact match).
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Record for User {
    const KEY: &'static str = KEY_USERS;
    const ENTITY: &'static str = "User";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Password hash for one user. Kept apart from [`User`] so the user record
/// stays safe to export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredCredential {
    pub user_id: UserId,
    #[serde(flatten)]
    pub credential: PasswordCredential,
}

impl Record for StoredCredential {
    const KEY: &'static str = KEY_CREDENTIALS;
    const ENTITY: &'static str = "Credential";

    fn record_id(&self) -> &str {
        self.user_id.as_str()
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// An event owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    /// Set by the store when the event is created.
    pub created_at: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339, see [`venuvibe_shared::dates`].
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    /// The parsed event date, if it is in a recognised format.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

impl Record for Event {
    const KEY: &'static str = KEY_EVENTS;
    const ENTITY: &'static str = "Event";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Input to [`Database::create_event`](crate::Database::create_event): an
/// event without its generated `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    pub user_id: UserId,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            description: None,
            date: date.into(),
            location: None,
            user_id,
            template_id: None,
            banner_image: None,
            status: EventStatus::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Guest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub plus_ones: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Guest {
    /// The guest plus everyone they bring. Saturates instead of wrapping.
    pub fn headcount(&self) -> u32 {
        self.plus_ones.saturating_add(1)
    }
}

impl Record for Guest {
    const KEY: &'static str = KEY_GUESTS;
    const ENTITY: &'static str = "Guest";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGuest {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub plus_ones: u32,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewGuest {
    pub fn new(event_id: EventId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            event_id,
            name: name.into(),
            email: email.into(),
            phone: None,
            rsvp_status: RsvpStatus::default(),
            plus_ones: 0,
            dietary_restrictions: None,
            notes: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Vendor
// ---------------------------------------------------------------------------

/// A vendor in the shared catalog. Vendors are not owned by an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    /// Lowercase category slug, e.g. `venue`, `catering`, `florist`.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// 0.0 to 5.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// `$`, `$$` or `$$$`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Record for Vendor {
    const KEY: &'static str = KEY_VENDORS;
    const ENTITY: &'static str = "Vendor";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVendor {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub price_tier: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewVendor {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: None,
            contact_email: None,
            contact_phone: None,
            website: None,
            rating: None,
            price_tier: None,
            image_url: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Budget item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetItem {
    pub id: BudgetItemId,
    pub event_id: EventId,
    pub category: String,
    pub item: String,
    pub estimated_cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<Decimal>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for BudgetItem {
    const KEY: &'static str = KEY_BUDGET_ITEMS;
    const ENTITY: &'static str = "Budget item";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBudgetItem {
    pub event_id: EventId,
    pub category: String,
    pub item: String,
    pub estimated_cost: Decimal,
    #[serde(default)]
    pub actual_cost: Option<Decimal>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewBudgetItem {
    pub fn new(
        event_id: EventId,
        category: impl Into<String>,
        item: impl Into<String>,
        estimated_cost: Decimal,
    ) -> Self {
        Self {
            event_id,
            category: category.into(),
            item: item.into(),
            estimated_cost,
            actual_cost: None,
            paid: false,
            vendor: None,
            due_date: None,
            notes: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub event_id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Task {
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_date.as_deref().and_then(parse_date)
    }
}

impl Record for Task {
    const KEY: &'static str = KEY_TASKS;
    const ENTITY: &'static str = "Task";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub event_id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl NewTask {
    pub fn new(event_id: EventId, title: impl Into<String>) -> Self {
        Self {
            event_id,
            title: title.into(),
            description: None,
            due_date: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            category: None,
            assigned_to: None,
        }
    }
}
