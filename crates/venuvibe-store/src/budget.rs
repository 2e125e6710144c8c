//! CRUD operations for [`BudgetItem`] records.

use rust_decimal::Decimal;
use tracing::info;

use venuvibe_shared::constants::MAX_BUDGET_AMOUNT;
use venuvibe_shared::{BudgetItemId, EventId};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{BudgetItem, NewBudgetItem};

fn validate(category: &str, item: &str, estimated: Decimal, actual: Option<Decimal>) -> Result<()> {
    if category.trim().is_empty() {
        return Err(StoreError::Validation("Budget category is required".into()));
    }
    if item.trim().is_empty() {
        return Err(StoreError::Validation("Budget item name is required".into()));
    }
    if estimated.is_sign_negative() || actual.is_some_and(|a| a.is_sign_negative()) {
        return Err(StoreError::Validation("Costs cannot be negative".into()));
    }
    let max = Decimal::from(MAX_BUDGET_AMOUNT);
    if estimated > max || actual.is_some_and(|a| a > max) {
        return Err(StoreError::Validation(format!(
            "Costs cannot exceed {MAX_BUDGET_AMOUNT}"
        )));
    }
    Ok(())
}

impl Database {
    pub fn create_budget_item(&self, new: NewBudgetItem) -> Result<BudgetItem> {
        validate(&new.category, &new.item, new.estimated_cost, new.actual_cost)?;
        self.get_event(&new.event_id)?;

        let item = BudgetItem {
            id: BudgetItemId::generate(),
            event_id: new.event_id,
            category: new.category.trim().to_string(),
            item: new.item.trim().to_string(),
            estimated_cost: new.estimated_cost,
            actual_cost: new.actual_cost,
            paid: new.paid,
            vendor: new.vendor,
            due_date: new.due_date,
            notes: new.notes,
        };

        let item = self.insert_record(item)?;
        info!(item_id = %item.id, event_id = %item.event_id, "budget item created");
        Ok(item)
    }

    pub fn list_budget_items_for_event(&self, event_id: &EventId) -> Result<Vec<BudgetItem>> {
        self.select_records(|b: &BudgetItem| &b.event_id == event_id)
    }

    pub fn update_budget_item(&self, item: BudgetItem) -> Result<BudgetItem> {
        validate(&item.category, &item.item, item.estimated_cost, item.actual_cost)?;
        let item = self.replace_record(item)?;
        info!(item_id = %item.id, "budget item updated");
        Ok(item)
    }

    /// Flip the paid flag and return the new version.
    pub fn toggle_budget_item_paid(&self, id: &BudgetItemId) -> Result<BudgetItem> {
        let item = self.modify_record(id.as_str(), |b: &mut BudgetItem| b.paid = !b.paid)?;
        info!(item_id = %item.id, paid = item.paid, "payment status updated");
        Ok(item)
    }

    pub fn delete_budget_item(&self, id: &BudgetItemId) -> Result<()> {
        let removed = self.remove_record::<BudgetItem>(id.as_str())?;
        info!(item_id = %id, removed, "budget item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use venuvibe_shared::UserId;

    use super::*;
    use crate::models::NewEvent;

    fn setup() -> (Database, EventId) {
        let db = Database::in_memory();
        let event = db
            .create_event(NewEvent::new("Wedding", "2025-07-15", UserId::from("u1")))
            .unwrap();
        (db, event.id)
    }

    #[test]
    fn toggling_paid_flips_flag() {
        let (db, event_id) = setup();
        let item = db
            .create_budget_item(NewBudgetItem::new(
                event_id.clone(),
                "Catering",
                "Dessert",
                Decimal::from(1000),
            ))
            .unwrap();
        assert!(!item.paid);

        assert!(db.toggle_budget_item_paid(&item.id).unwrap().paid);
        assert!(!db.toggle_budget_item_paid(&item.id).unwrap().paid);
    }

    #[test]
    fn amounts_survive_round_trip() {
        let (db, event_id) = setup();
        let mut new =
            NewBudgetItem::new(event_id.clone(), "Venue", "Hall", Decimal::new(400050, 2));
        new.actual_cost = Some(Decimal::new(379999, 2));
        let item = db.create_budget_item(new).unwrap();

        let stored = db.list_budget_items_for_event(&event_id).unwrap();
        assert_eq!(stored, vec![item]);
        assert_eq!(stored[0].estimated_cost, Decimal::new(400050, 2));
    }

    #[test]
    fn negative_costs_are_rejected() {
        let (db, event_id) = setup();
        let new = NewBudgetItem::new(event_id, "Venue", "Hall", Decimal::from(-5));
        assert!(matches!(
            db.create_budget_item(new),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn amounts_above_the_cap_are_rejected() {
        let (db, event_id) = setup();
        let huge = NewBudgetItem::new(event_id.clone(), "Venue", "Hall", Decimal::MAX);
        assert!(matches!(
            db.create_budget_item(huge),
            Err(StoreError::Validation(_))
        ));

        let mut new = NewBudgetItem::new(
            event_id.clone(),
            "Venue",
            "Hall",
            Decimal::from(MAX_BUDGET_AMOUNT),
        );
        let mut item = db.create_budget_item(new.clone()).unwrap();

        item.actual_cost = Some(Decimal::MAX);
        assert!(matches!(
            db.update_budget_item(item),
            Err(StoreError::Validation(_))
        ));

        new.actual_cost = Some(Decimal::from(MAX_BUDGET_AMOUNT) + Decimal::ONE);
        assert!(matches!(
            db.create_budget_item(new),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(db.list_budget_items_for_event(&event_id).unwrap().len(), 1);
    }

    #[test]
    fn delete_unknown_item_is_a_noop() {
        let (db, _) = setup();
        db.delete_budget_item(&BudgetItemId::from("ghost")).unwrap();
    }
}
