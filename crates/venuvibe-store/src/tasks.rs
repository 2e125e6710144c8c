//! CRUD operations for [`Task`] records.

use tracing::info;

use venuvibe_shared::dates::parse_date;
use venuvibe_shared::{EventId, TaskId, TaskStatus};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{NewTask, Task};

fn validate(title: &str, due_date: Option<&str>) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation("Task title is required".into()));
    }
    if let Some(due) = due_date {
        if parse_date(due).is_none() {
            return Err(StoreError::Validation(format!(
                "Task due date '{due}' is not a valid date"
            )));
        }
    }
    Ok(())
}

impl Database {
    pub fn create_task(&self, new: NewTask) -> Result<Task> {
        validate(&new.title, new.due_date.as_deref())?;
        self.get_event(&new.event_id)?;

        let task = Task {
            id: TaskId::generate(),
            event_id: new.event_id,
            title: new.title.trim().to_string(),
            description: new.description,
            due_date: new.due_date,
            status: new.status,
            priority: new.priority,
            category: new.category,
            assigned_to: new.assigned_to,
        };

        let task = self.insert_record(task)?;
        info!(task_id = %task.id, event_id = %task.event_id, "task created");
        Ok(task)
    }

    pub fn list_tasks_for_event(&self, event_id: &EventId) -> Result<Vec<Task>> {
        self.select_records(|t: &Task| &t.event_id == event_id)
    }

    pub fn update_task(&self, task: Task) -> Result<Task> {
        validate(&task.title, task.due_date.as_deref())?;
        let task = self.replace_record(task)?;
        info!(task_id = %task.id, "task updated");
        Ok(task)
    }

    pub fn set_task_status(&self, id: &TaskId, status: TaskStatus) -> Result<Task> {
        let task = self.modify_record(id.as_str(), |t: &mut Task| t.status = status)?;
        info!(task_id = %task.id, status = %status, "task status changed");
        Ok(task)
    }

    pub fn delete_task(&self, id: &TaskId) -> Result<()> {
        let removed = self.remove_record::<Task>(id.as_str())?;
        info!(task_id = %id, removed, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use venuvibe_shared::{TaskPriority, UserId};

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
    fn create_and_list() {
        let (db, event_id) = setup();
        let mut new = NewTask::new(event_id.clone(), "Book venue");
        new.priority = TaskPriority::High;
        new.due_date = Some("2025-05-15".into());

        let task = db.create_task(new).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(db.list_tasks_for_event(&event_id).unwrap(), vec![task]);
    }

    #[test]
    fn rejects_unparseable_due_date() {
        let (db, event_id) = setup();
        let mut new = NewTask::new(event_id, "Book venue");
        new.due_date = Some("soon".into());
        assert!(matches!(db.create_task(new), Err(StoreError::Validation(_))));
    }

    #[test]
    fn status_change_persists() {
        let (db, event_id) = setup();
        let task = db.create_task(NewTask::new(event_id.clone(), "Order cake")).unwrap();

        let done = db.set_task_status(&task.id, TaskStatus::Completed).unwrap();
        assert_eq!(done.status, TaskStatus::Completed);
        assert_eq!(
            db.list_tasks_for_event(&event_id).unwrap()[0].status,
            TaskStatus::Completed
        );
    }

    #[test]
    fn update_unknown_task_fails() {
        let (db, event_id) = setup();
        let mut task = db.create_task(NewTask::new(event_id, "Order cake")).unwrap();
        task.id = TaskId::from("ghost");
        assert!(matches!(
            db.update_task(task),
            Err(StoreError::NotFound { entity: "Task", .. })
        ));
    }

    #[test]
    fn delete_task_removes_it() {
        let (db, event_id) = setup();
        let task = db.create_task(NewTask::new(event_id.clone(), "Order cake")).unwrap();
        db.delete_task(&task.id).unwrap();
        assert!(db.list_tasks_for_event(&event_id).unwrap().is_empty());
    }
}
