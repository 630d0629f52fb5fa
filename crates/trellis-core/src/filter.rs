use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

use crate::grid::add_days;
use crate::task::{
  Category,
  Task
};

/// Session-scoped filter settings.
/// Defaults show everything; nothing
/// here is ever persisted.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct FilterState {
  active_categories:
    BTreeSet<Category>,
  search:      String,
  weeks_ahead: Option<u32>
}

impl Default for FilterState {
  fn default() -> Self {
    Self {
      active_categories: Category::ALL
        .into_iter()
        .collect(),
      search:      String::new(),
      weeks_ahead: None
    }
  }
}

impl FilterState {
  pub fn is_active(
    &self,
    category: Category
  ) -> bool {
    self
      .active_categories
      .contains(&category)
  }

  pub fn toggle_category(
    &mut self,
    category: Category
  ) {
    if !self
      .active_categories
      .remove(&category)
    {
      self
        .active_categories
        .insert(category);
    }
    trace!(
      category = category.as_key(),
      active = self.is_active(category),
      "toggled category filter"
    );
  }

  pub fn search(&self) -> &str {
    &self.search
  }

  pub fn set_search(
    &mut self,
    raw: &str
  ) {
    self.search = raw.to_string();
  }

  pub fn weeks_ahead(
    &self
  ) -> Option<u32> {
    self.weeks_ahead
  }

  pub fn set_weeks_ahead(
    &mut self,
    weeks: Option<u32>
  ) {
    self.weeks_ahead = weeks;
  }

  /// `today + 7w` when a window is
  /// set. `today` comes from the
  /// caller at query time and is
  /// never cached here.
  pub fn cutoff(
    &self,
    today: NaiveDate
  ) -> Option<NaiveDate> {
    self.weeks_ahead.map(|weeks| {
      add_days(
        today,
        i64::from(weeks) * 7
      )
    })
  }

  /// All three predicates ANDed. The
  /// time window compares the start
  /// date only; a task ending past
  /// the cutoff is judged on where
  /// it starts.
  pub fn matches(
    &self,
    task: &Task,
    today: NaiveDate
  ) -> bool {
    if !self
      .active_categories
      .contains(&task.category)
    {
      return false;
    }

    if !self.search.is_empty() {
      let needle = self
        .search
        .to_ascii_lowercase();
      if !task
        .name
        .to_ascii_lowercase()
        .contains(&needle)
      {
        return false;
      }
    }

    if let Some(cutoff) =
      self.cutoff(today)
      && task.start > cutoff
    {
      return false;
    }

    true
  }
}

/// Fresh, order-preserving pass over
/// the full list; no caching.
pub fn visible_tasks(
  tasks: &[Task],
  filters: &FilterState,
  today: NaiveDate
) -> Vec<Task> {
  tasks
    .iter()
    .filter(|task| {
      filters.matches(task, today)
    })
    .cloned()
    .collect()
}

pub fn tasks_on_day(
  day: NaiveDate,
  visible: &[Task]
) -> Vec<Task> {
  visible
    .iter()
    .filter(|task| task.occupies(day))
    .cloned()
    .collect()
}
