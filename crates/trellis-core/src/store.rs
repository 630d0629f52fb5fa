use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::task::{Category, Task};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task name is empty")]
    EmptyName,

    #[error("task {0} does not exist")]
    UnknownTask(Uuid),

    #[error("inverted date range: {start} is after {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Append-ordered, in-memory task list. The store is the only owner of
/// tasks; callers mutate exclusively through its operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task from a trimmed name and a normalized date range.
    /// A blank name declines the creation; nothing is appended.
    #[tracing::instrument(skip(self, name))]
    pub fn create(
        &mut self,
        name: &str,
        category: Category,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Task, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if start > end {
            return Err(StoreError::InvertedRange { start, end });
        }

        let task = Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            start,
            end,
        };
        debug!(id = %task.id, name = %task.name, %start, %end, "created task");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces a task's date range. Callers are expected to pass an
    /// ordered range already; an inverted one is still rejected here so
    /// the `start <= end` invariant cannot be broken through the store.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn set_date_range(
        &mut self,
        id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(), StoreError> {
        if start > end {
            return Err(StoreError::InvertedRange { start, end });
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::UnknownTask(id))?;

        if task.start == start && task.end == end {
            return Ok(());
        }

        debug!(%start, %end, "moved task range");
        task.start = start;
        task.end = end;
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Read-only snapshot; append order is the iteration order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn create_trims_name_and_appends_in_order() {
        let mut store = TaskStore::new();

        let first = store
            .create("  Write draft  ", Category::ToDo, date(2024, 3, 4), date(2024, 3, 5))
            .expect("create");
        let second = store
            .create("Review draft", Category::Review, date(2024, 3, 6), date(2024, 3, 6))
            .expect("create");

        assert_eq!(first.name, "Write draft");
        assert_ne!(first.id, second.id);

        let names: Vec<&str> = store.list().iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, vec!["Write draft", "Review draft"]);
    }

    #[test]
    fn blank_name_creates_nothing() {
        let mut store = TaskStore::new();

        let result = store.create("   ", Category::ToDo, date(2024, 3, 4), date(2024, 3, 5));

        assert_eq!(result, Err(StoreError::EmptyName));
        assert!(store.is_empty());
    }

    #[test]
    fn inverted_create_range_is_rejected() {
        let mut store = TaskStore::new();

        let result = store.create("Oops", Category::ToDo, date(2024, 3, 9), date(2024, 3, 4));

        assert!(matches!(result, Err(StoreError::InvertedRange { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn set_date_range_moves_and_rejects_inversion() {
        let mut store = TaskStore::new();
        let task = store
            .create("Ship it", Category::InProgress, date(2024, 3, 4), date(2024, 3, 6))
            .expect("create");

        store
            .set_date_range(task.id, date(2024, 3, 11), date(2024, 3, 13))
            .expect("move");
        let moved = store.get(task.id).expect("task exists");
        assert_eq!(moved.start, date(2024, 3, 11));
        assert_eq!(moved.end, date(2024, 3, 13));

        let result = store.set_date_range(task.id, date(2024, 3, 20), date(2024, 3, 13));
        assert!(matches!(result, Err(StoreError::InvertedRange { .. })));
        let unchanged = store.get(task.id).expect("task exists");
        assert_eq!(unchanged.start, date(2024, 3, 11));
        assert_eq!(unchanged.end, date(2024, 3, 13));
    }

    #[test]
    fn set_date_range_with_current_dates_is_a_no_op() {
        let mut store = TaskStore::new();
        let task = store
            .create("Hold steady", Category::Completed, date(2024, 3, 4), date(2024, 3, 6))
            .expect("create");

        let before = store.clone();
        store
            .set_date_range(task.id, date(2024, 3, 4), date(2024, 3, 6))
            .expect("no-op");

        assert_eq!(store, before);
    }

    #[test]
    fn unknown_task_is_reported() {
        let mut store = TaskStore::new();

        let result = store.set_date_range(Uuid::new_v4(), date(2024, 3, 4), date(2024, 3, 6));

        assert!(matches!(result, Err(StoreError::UnknownTask(_))));
    }
}
