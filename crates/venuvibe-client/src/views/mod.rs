//! View-state controllers.
//!
//! Each controller owns a working copy of one collection and derives what a
//! list or detail screen shows from it. They never touch the store; callers
//! persist changes through [`AppContext`](crate::AppContext) or the
//! [`Database`](venuvibe_store::Database) and rebuild the view.

pub mod budget;
pub mod dashboard;
pub mod events;
pub mod filter;
pub mod guests;
pub mod tasks;
pub mod vendors;

pub use budget::{BudgetCategory, BudgetTracker};
pub use dashboard::DashboardStats;
pub use events::EventListView;
pub use filter::SortDirection;
pub use guests::{GuestListView, RsvpCounts};
pub use tasks::{TaskCounts, TaskListView, TaskSortField};
pub use vendors::VendorListView;
