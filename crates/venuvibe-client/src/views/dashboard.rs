//! Dashboard summary numbers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use venuvibe_shared::TaskStatus;
use venuvibe_store::{BudgetItem, Event, Guest, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_events: usize,
    /// Events whose date is strictly after `now`. Unparseable dates never count.
    pub upcoming_events: usize,
    /// Guests plus their plus-ones.
    pub total_guests: u32,
    /// Sum of estimated costs, saturating at `Decimal::MAX`.
    pub total_budget: Decimal,
    pub completed_tasks: usize,
    /// Every task not completed, overdue ones included.
    pub pending_tasks: usize,
}

impl DashboardStats {
    pub fn compute(
        events: &[Event],
        guests: &[Guest],
        budget_items: &[BudgetItem],
        tasks: &[Task],
        now: DateTime<Utc>,
    ) -> Self {
        let completed_tasks = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();

        Self {
            total_events: events.len(),
            upcoming_events: events.iter().filter(|e| is_upcoming(e, now)).count(),
            total_guests: guests
                .iter()
                .fold(0u32, |acc, g| acc.saturating_add(g.headcount())),
            total_budget: budget_items
                .iter()
                .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.estimated_cost)),
            completed_tasks,
            pending_tasks: tasks.len() - completed_tasks,
        }
    }
}

fn is_upcoming(event: &Event, now: DateTime<Utc>) -> bool {
    event.starts_at().is_some_and(|at| at > now)
}

/// The next `limit` upcoming events, soonest first.
pub fn upcoming(events: &[Event], now: DateTime<Utc>, limit: usize) -> Vec<&Event> {
    let mut rows: Vec<&Event> = events.iter().filter(|e| is_upcoming(e, now)).collect();
    rows.sort_by_key(|e| e.starts_at());
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use venuvibe_shared::{
        BudgetItemId, EventId, EventStatus, GuestId, RsvpStatus, TaskId, TaskPriority, UserId,
    };

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn event(id: &str, date: &str) -> Event {
        Event {
            id: EventId::from(id),
            created_at: now(),
            title: format!("Event {id}"),
            description: None,
            date: date.into(),
            location: None,
            user_id: UserId::from("u1"),
            template_id: None,
            banner_image: None,
            status: EventStatus::Planning,
        }
    }

    fn guest(plus_ones: u32) -> Guest {
        Guest {
            id: GuestId::generate(),
            event_id: EventId::from("a"),
            name: "Guest".into(),
            email: "guest@example.com".into(),
            phone: None,
            rsvp_status: RsvpStatus::Pending,
            plus_ones,
            dietary_restrictions: None,
            notes: None,
        }
    }

    fn budget(cost: i64) -> BudgetItem {
        BudgetItem {
            id: BudgetItemId::generate(),
            event_id: EventId::from("a"),
            category: "Venue".into(),
            item: "Hall".into(),
            estimated_cost: Decimal::from(cost),
            actual_cost: None,
            paid: false,
            vendor: None,
            due_date: None,
            notes: None,
        }
    }

    fn task(status: TaskStatus) -> Task {
        Task {
            id: TaskId::generate(),
            event_id: EventId::from("a"),
            title: "Task".into(),
            description: None,
            due_date: None,
            status,
            priority: TaskPriority::Medium,
            category: None,
            assigned_to: None,
        }
    }

    #[test]
    fn computes_all_counters() {
        let events = [
            event("a", "2025-07-01"),
            event("b", "2025-05-01"),
            event("c", "2025-06-01T12:00:00Z"),
            event("d", "not a date"),
        ];
        let guests = [guest(0), guest(2)];
        let items = [budget(5000), budget(2500)];
        let tasks = [
            task(TaskStatus::Completed),
            task(TaskStatus::Pending),
            task(TaskStatus::Overdue),
        ];

        let stats = DashboardStats::compute(&events, &guests, &items, &tasks, now());
        assert_eq!(
            stats,
            DashboardStats {
                total_events: 4,
                upcoming_events: 1,
                total_guests: 4,
                total_budget: Decimal::from(7500),
                completed_tasks: 1,
                pending_tasks: 2,
            }
        );
    }

    #[test]
    fn oversized_rows_saturate_instead_of_panicking() {
        let mut huge_item = budget(0);
        huge_item.estimated_cost = Decimal::MAX;
        let items = [huge_item.clone(), huge_item];
        let guests = [guest(u32::MAX), guest(1)];

        let stats = DashboardStats::compute(&[], &guests, &items, &[], now());
        assert_eq!(stats.total_guests, u32::MAX);
        assert_eq!(stats.total_budget, Decimal::MAX);
    }

    #[test]
    fn empty_inputs_give_zeroes() {
        let stats = DashboardStats::compute(&[], &[], &[], &[], now());
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn upcoming_is_sorted_and_limited() {
        let events = [
            event("late", "2025-12-24"),
            event("past", "2025-01-01"),
            event("soon", "2025-06-02"),
            event("mid", "2025-09-09"),
        ];
        let ids: Vec<_> = upcoming(&events, now(), 2)
            .iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, ["soon", "mid"]);
    }
}
