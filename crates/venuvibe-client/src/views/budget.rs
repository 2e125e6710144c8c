//! Budget tracker: line items grouped by category with planned/actual sums.

use rust_decimal::Decimal;

use venuvibe_shared::BudgetItemId;
use venuvibe_store::BudgetItem;

/// One category row of the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetCategory {
    pub name: String,
    /// Sum of estimated costs.
    pub planned: Decimal,
    /// Sum of actual costs; items without one count as zero.
    pub actual: Decimal,
    pub items: Vec<BudgetItem>,
}

#[derive(Debug, Clone, Default)]
pub struct BudgetTracker {
    items: Vec<BudgetItem>,
}

impl BudgetTracker {
    pub fn new(items: Vec<BudgetItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    /// Items grouped by category, categories in first-seen order.
    pub fn categories(&self) -> Vec<BudgetCategory> {
        let mut groups: Vec<BudgetCategory> = Vec::new();
        for item in &self.items {
            let idx = match groups.iter().position(|c| c.name == item.category) {
                Some(idx) => idx,
                None => {
                    groups.push(BudgetCategory {
                        name: item.category.clone(),
                        planned: Decimal::ZERO,
                        actual: Decimal::ZERO,
                        items: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[idx];
            group.planned = group.planned.saturating_add(item.estimated_cost);
            group.actual = group.actual.saturating_add(actual_of(item));
            group.items.push(item.clone());
        }
        groups
    }

    // Totals saturate at the `Decimal` range instead of panicking.

    pub fn total_planned(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.estimated_cost))
    }

    pub fn total_actual(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(actual_of(i)))
    }

    /// Planned minus actual. Negative when over budget.
    pub fn total_remaining(&self) -> Decimal {
        self.total_planned().saturating_sub(self.total_actual())
    }

    /// Actual spend as a percentage of the plan, 0 when nothing is planned.
    pub fn progress_percent(&self) -> Decimal {
        let planned = self.total_planned();
        if planned.is_zero() {
            return Decimal::ZERO;
        }
        self.total_actual()
            .checked_div(planned)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    }

    pub fn toggle_paid(&mut self, id: &BudgetItemId) -> Option<BudgetItem> {
        let item = self.items.iter_mut().find(|i| &i.id == id)?;
        item.paid = !item.paid;
        Some(item.clone())
    }

    pub fn remove(&mut self, id: &BudgetItemId) -> Option<BudgetItem> {
        let pos = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(pos))
    }
}

fn actual_of(item: &BudgetItem) -> Decimal {
    item.actual_cost.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use venuvibe_shared::EventId;

    use super::*;

    fn item(
        id: &str,
        category: &str,
        name: &str,
        planned: i64,
        actual: Option<i64>,
    ) -> BudgetItem {
        BudgetItem {
            id: BudgetItemId::from(id),
            event_id: EventId::from("e1"),
            category: category.into(),
            item: name.into(),
            estimated_cost: Decimal::from(planned),
            actual_cost: actual.map(Decimal::from),
            paid: actual.is_some(),
            vendor: None,
            due_date: None,
            notes: None,
        }
    }

    fn fixture() -> BudgetTracker {
        BudgetTracker::new(vec![
            item("1-1", "Venue", "Reception Hall", 4000, Some(3800)),
            item("2-1", "Catering", "Main Course", 5000, Some(4800)),
            item("1-2", "Venue", "Ceremony Space", 1000, Some(1000)),
            item("2-2", "Catering", "Appetizers", 2000, Some(1900)),
            item("3-1", "Decor", "Flowers", 1000, None),
        ])
    }

    #[test]
    fn groups_in_first_seen_order() {
        let categories = fixture().categories();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Venue", "Catering", "Decor"]);

        assert_eq!(categories[0].planned, Decimal::from(5000));
        assert_eq!(categories[0].actual, Decimal::from(4800));
        assert_eq!(categories[0].items.len(), 2);
        assert_eq!(categories[2].actual, Decimal::ZERO);
    }

    #[test]
    fn totals_and_progress() {
        let tracker = fixture();
        assert_eq!(tracker.total_planned(), Decimal::from(13000));
        assert_eq!(tracker.total_actual(), Decimal::from(11500));
        assert_eq!(tracker.total_remaining(), Decimal::from(1500));

        let progress = tracker.progress_percent().round_dp(2);
        assert_eq!(progress, Decimal::new(8846, 2));
    }

    #[test]
    fn progress_is_zero_without_a_plan() {
        assert_eq!(BudgetTracker::default().progress_percent(), Decimal::ZERO);
        let free = BudgetTracker::new(vec![item("x", "Misc", "Gift", 0, Some(10))]);
        assert_eq!(free.progress_percent(), Decimal::ZERO);
    }

    #[test]
    fn toggle_paid_and_remove() {
        let mut tracker = fixture();
        let flipped = tracker.toggle_paid(&BudgetItemId::from("3-1")).unwrap();
        assert!(flipped.paid);
        assert!(!tracker.toggle_paid(&BudgetItemId::from("3-1")).unwrap().paid);

        tracker.remove(&BudgetItemId::from("1-1")).unwrap();
        let categories = tracker.categories();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Catering", "Venue", "Decor"]);
        assert_eq!(categories[1].planned, Decimal::from(1000));
        assert!(tracker.remove(&BudgetItemId::from("1-1")).is_none());
    }

    #[test]
    fn huge_amounts_saturate() {
        let mut a = item("a", "Venue", "Hall", 0, None);
        a.estimated_cost = Decimal::MAX;
        a.actual_cost = Some(Decimal::MAX);
        let mut b = a.clone();
        b.id = BudgetItemId::from("b");
        let tracker = BudgetTracker::new(vec![a, b]);

        assert_eq!(tracker.total_planned(), Decimal::MAX);
        assert_eq!(tracker.total_actual(), Decimal::MAX);
        assert_eq!(tracker.total_remaining(), Decimal::ZERO);
        assert_eq!(tracker.progress_percent(), Decimal::ONE_HUNDRED);
        assert_eq!(tracker.categories()[0].planned, Decimal::MAX);
    }
}
