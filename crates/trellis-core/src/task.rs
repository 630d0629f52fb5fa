use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ToDo,
    InProgress,
    Review,
    Completed,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ToDo,
        Category::InProgress,
        Category::Review,
        Category::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ToDo => "To Do",
            Category::InProgress => "In Progress",
            Category::Review => "Review",
            Category::Completed => "Completed",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::ToDo => "blue",
            Category::InProgress => "yellow",
            Category::Review => "purple",
            Category::Completed => "green",
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Category::ToDo => "todo",
            Category::InProgress => "in-progress",
            Category::Review => "review",
            Category::Completed => "completed",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    pub name: String,

    pub category: Category,

    pub start: NaiveDate,

    pub end: NaiveDate,
}

impl Task {
    /// Inclusive calendar-date containment; time of day never enters.
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Whole-day span, `end - start`. Zero for a single-day task.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
