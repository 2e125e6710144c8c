//! Task list: search, priority/status filters, sorting and status toggles.

use std::cmp::Ordering;

use venuvibe_shared::{TaskId, TaskPriority, TaskStatus};
use venuvibe_store::Task;

use super::filter::{matches_search, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSortField {
    #[default]
    DueDate,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TaskListView {
    tasks: Vec<Task>,
    pub search: String,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    sort_by: TaskSortField,
    direction: SortDirection,
}

impl TaskListView {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// The full working copy, unfiltered and in storage order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sort_by(&self) -> TaskSortField {
        self.sort_by
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Clicking the current sort column flips the direction; clicking a
    /// different one sorts by it ascending.
    pub fn toggle_sort(&mut self, field: TaskSortField) {
        if self.sort_by == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort_by = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Tasks passing the search and filters, sorted. The sort is stable.
    pub fn visible(&self) -> Vec<&Task> {
        let mut rows: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| matches_search(&self.search, &[Some(t.title.as_str())]))
            .filter(|t| self.priority.map_or(true, |p| t.priority == p))
            .filter(|t| self.status.map_or(true, |s| t.status == s))
            .collect();

        let direction = self.direction;
        match self.sort_by {
            TaskSortField::DueDate => {
                rows.sort_by(|a, b| direction.apply(compare_due(a, b)));
            }
            TaskSortField::Priority => {
                rows.sort_by(|a, b| direction.apply(a.priority.rank().cmp(&b.priority.rank())));
            }
        }
        rows
    }

    /// Completed tasks go back to pending; anything else becomes completed.
    pub fn toggle_status(&mut self, id: &TaskId) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| &t.id == id)?;
        task.status = task.status.toggled();
        Some(task.clone())
    }

    pub fn mark_complete(&mut self, id: &TaskId) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| &t.id == id)?;
        task.status = TaskStatus::Completed;
        Some(task.clone())
    }

    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Counts over every task, ignoring the filters.
    pub fn counts(&self) -> TaskCounts {
        self.tasks
            .iter()
            .fold(TaskCounts::default(), |mut acc, t| {
                match t.status {
                    TaskStatus::Pending => acc.pending += 1,
                    TaskStatus::Completed => acc.completed += 1,
                    TaskStatus::Overdue => acc.overdue += 1,
                }
                acc
            })
    }
}

// Undated tasks sort after dated ones when ascending.
fn compare_due(a: &Task, b: &Task) -> Ordering {
    match (a.due_at(), b.due_at()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
