use chrono::NaiveDate;
use tracing::{
  debug,
  trace
};
use uuid::Uuid;

use crate::controller::{
  DragEdge,
  DragKind,
  PointerState,
  SelectionRange
};
use crate::filter::{
  FilterState,
  visible_tasks
};
use crate::grid::{
  MonthGrid,
  add_days,
  month_title,
  shift_months
};
use crate::store::TaskStore;
use crate::task::{
  Category,
  Task
};

/// Draft held by the creation dialog
/// between a completed selection and
/// its submit or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
  pub name:     String,
  pub category: Category,
  pub start:    NaiveDate,
  pub end:      NaiveDate
}

impl TaskDraft {
  pub fn can_submit(&self) -> bool {
    !self.name.trim().is_empty()
  }
}

/// The session context: the single
/// owner of all mutable planner
/// state. Pointer gestures, filter
/// edits, and month navigation all
/// arrive here as method calls;
/// rendering reads back through
/// derived queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Planner {
  focus:   NaiveDate,
  grid:    MonthGrid,
  store:   TaskStore,
  filters: FilterState,
  pointer: PointerState,
  draft:   Option<TaskDraft>
}

impl Planner {
  pub fn new(
    today: NaiveDate
  ) -> Self {
    Self {
      focus:   today,
      grid:    MonthGrid::for_month(
        today
      ),
      store:   TaskStore::new(),
      filters: FilterState::default(),
      pointer: PointerState::Idle,
      draft:   None
    }
  }

  pub fn focus(&self) -> NaiveDate {
    self.focus
  }

  pub fn grid(&self) -> &MonthGrid {
    &self.grid
  }

  pub fn store(&self) -> &TaskStore {
    &self.store
  }

  pub fn filters(
    &self
  ) -> &FilterState {
    &self.filters
  }

  pub fn pointer(
    &self
  ) -> &PointerState {
    &self.pointer
  }

  pub fn drag_kind(&self) -> DragKind {
    self.pointer.kind()
  }

  pub fn draft(
    &self
  ) -> Option<&TaskDraft> {
    self.draft.as_ref()
  }

  pub fn month_title(&self) -> String {
    month_title(self.focus)
  }

  /// Live selection highlight while
  /// a creation drag is in flight.
  pub fn selection(
    &self
  ) -> Option<SelectionRange> {
    match &self.pointer {
      | PointerState::Selecting {
        anchor,
        focus
      } => Some(
        SelectionRange::normalized(
          *anchor, *focus
        )
      ),
      | _ => None
    }
  }

  pub fn visible_tasks(
    &self,
    today: NaiveDate
  ) -> Vec<Task> {
    visible_tasks(
      self.store.list(),
      &self.filters,
      today
    )
  }

  // --- month navigation ---

  pub fn goto_prev_month(&mut self) {
    self.refocus(shift_months(
      self.focus, -1
    ));
  }

  pub fn goto_next_month(&mut self) {
    self.refocus(shift_months(
      self.focus, 1
    ));
  }

  pub fn goto_today(
    &mut self,
    today: NaiveDate
  ) {
    self.refocus(today);
  }

  fn refocus(
    &mut self,
    focus: NaiveDate
  ) {
    self.focus = focus;
    self.grid =
      MonthGrid::for_month(focus);
    debug!(
      month = %self.month_title(),
      "refocused month"
    );
  }

  // --- filter edits ---

  pub fn toggle_category(
    &mut self,
    category: Category
  ) {
    self
      .filters
      .toggle_category(category);
  }

  pub fn set_search(
    &mut self,
    raw: &str
  ) {
    self.filters.set_search(raw);
  }

  pub fn set_weeks_ahead(
    &mut self,
    weeks: Option<u32>
  ) {
    self
      .filters
      .set_weeks_ahead(weeks);
  }

  // --- pointer gestures ---

  /// Pointer-down on a grid cell.
  /// Only a primary-button press on
  /// a real date in an idle session
  /// anchors a selection; task bars
  /// stop propagation before this
  /// path is reached.
  pub fn press_cell(
    &mut self,
    date: Option<NaiveDate>,
    primary: bool
  ) {
    if !self.pointer.is_idle()
      || !primary
    {
      return;
    }
    let Some(date) = date else {
      return;
    };

    trace!(%date, "selection anchored");
    self.pointer =
      PointerState::Selecting {
        anchor: date,
        focus:  date
      };
  }

  /// Pointer-enter over a cell
  /// while selecting stretches the
  /// live end of the range.
  pub fn enter_cell(
    &mut self,
    date: Option<NaiveDate>
  ) {
    let PointerState::Selecting {
      anchor,
      ..
    } = self.pointer
    else {
      return;
    };
    let Some(date) = date else {
      return;
    };

    self.pointer =
      PointerState::Selecting {
        anchor,
        focus: date
      };
  }

  /// Pointer-down on a task bar
  /// body. Captures the grab offset
  /// from the bar's left edge and
  /// the original duration so the
  /// whole span shifts rigidly.
  pub fn press_task(
    &mut self,
    id: Uuid,
    grab_offset_px: f64
  ) {
    if !self.pointer.is_idle() {
      return;
    }
    let Some(task) =
      self.store.get(id)
    else {
      return;
    };

    trace!(
      %id,
      grab_offset_px,
      "move started"
    );
    self.pointer =
      PointerState::Moving {
        task: id,
        grab_offset_px,
        duration_days: task
          .duration_days()
      };
  }

  /// Pointer-down on a bar's edge
  /// handle.
  pub fn press_task_edge(
    &mut self,
    id: Uuid,
    edge: DragEdge
  ) {
    if !self.pointer.is_idle() {
      return;
    }
    if self.store.get(id).is_none() {
      return;
    }

    trace!(%id, ?edge, "resize started");
    self.pointer =
      PointerState::Resizing {
        task: id,
        edge
      };
  }

  /// Pointer-move during a move or
  /// resize. The horizontal pixel
  /// position maps to a cell index,
  /// clamped to the grid; blank
  /// cells and updates that would
  /// invert the range leave the task
  /// untouched while the drag stays
  /// live.
  pub fn drag_to(
    &mut self,
    x: f64,
    grid_width: f64
  ) {
    match self.pointer {
      | PointerState::Moving {
        task,
        duration_days,
        ..
      } => {
        let index = self
          .grid
          .day_index_at_x(
            x, grid_width
          );
        let Some(start) =
          self.grid.date_at(index)
        else {
          return;
        };
        let end = add_days(
          start,
          duration_days
        );
        if let Err(error) = self
          .store
          .set_date_range(
            task, start, end
          )
        {
          trace!(
            %error,
            "move update declined"
          );
        }
      }
      | PointerState::Resizing {
        task,
        edge
      } => {
        let index = self
          .grid
          .day_index_at_x(
            x, grid_width
          );
        let Some(date) =
          self.grid.date_at(index)
        else {
          return;
        };
        let Some(current) =
          self.store.get(task)
        else {
          return;
        };

        let (start, end) = match edge
        {
          | DragEdge::Left => {
            (date, current.end)
          }
          | DragEdge::Right => {
            (current.start, date)
          }
        };
        if start > end {
          trace!(
            %start,
            %end,
            "resize would invert; \
             dropped"
          );
          return;
        }
        if let Err(error) = self
          .store
          .set_date_range(
            task, start, end
          )
        {
          trace!(
            %error,
            "resize update declined"
          );
        }
      }
      | _ => {}
    }
  }

  /// Pointer-up ends whichever drag
  /// is live. A finished selection
  /// opens the creation draft over
  /// its normalized range; a single
  /// cell yields a one-day range.
  pub fn release(&mut self) {
    match self.pointer {
      | PointerState::Selecting {
        anchor,
        focus
      } => {
        let range =
          SelectionRange::normalized(
            anchor, focus
          );
        debug!(
          start = %range.start,
          end = %range.end,
          "creation requested"
        );
        self.draft =
          Some(TaskDraft {
            name:     String::new(),
            category: Category::ToDo,
            start:    range.start,
            end:      range.end
          });
      }
      | PointerState::Moving {
        task,
        ..
      } => {
        trace!(%task, "move ended");
      }
      | PointerState::Resizing {
        task,
        ..
      } => {
        trace!(%task, "resize ended");
      }
      | PointerState::Idle => {}
    }
    self.pointer = PointerState::Idle;
  }

  // --- creation draft ---

  pub fn set_draft_name(
    &mut self,
    name: &str
  ) {
    if let Some(draft) =
      self.draft.as_mut()
    {
      draft.name = name.to_string();
    }
  }

  pub fn set_draft_category(
    &mut self,
    category: Category
  ) {
    if let Some(draft) =
      self.draft.as_mut()
    {
      draft.category = category;
    }
  }

  /// Creates the drafted task. A
  /// blank name declines the create
  /// and keeps the dialog open.
  pub fn submit_draft(&mut self) {
    let Some(draft) =
      self.draft.clone()
    else {
      return;
    };

    match self.store.create(
      &draft.name,
      draft.category,
      draft.start,
      draft.end
    ) {
      | Ok(task) => {
        debug!(
          id = %task.id,
          "draft submitted"
        );
        self.draft = None;
      }
      | Err(error) => {
        debug!(
          %error,
          "draft submit declined"
        );
      }
    }
  }

  pub fn cancel_draft(&mut self) {
    self.draft = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::grid::CalendarCell;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  fn march_planner() -> Planner {
    Planner::new(date(2024, 3, 5))
  }

  /// Grid x for the cell at `index`,
  /// assuming a 700px wide grid.
  fn cell_x(index: usize) -> f64 {
    index as f64 * 100.0 + 50.0
  }

  #[test]
  fn selection_drag_opens_a_draft() {
    let mut planner = march_planner();

    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.enter_cell(Some(date(
      2024, 3, 12
    )));
    assert_eq!(
      planner.selection(),
      Some(SelectionRange {
        start: date(2024, 3, 10),
        end:   date(2024, 3, 12)
      })
    );

    planner.release();
    assert!(planner
      .pointer()
      .is_idle());
    let draft = planner
      .draft()
      .expect("draft open");
    assert_eq!(
      draft.start,
      date(2024, 3, 10)
    );
    assert_eq!(
      draft.end,
      date(2024, 3, 12)
    );
    assert!(!draft.can_submit());
  }

  #[test]
  fn backwards_selection_normalizes()
  {
    let mut planner = march_planner();

    planner.press_cell(
      Some(date(2024, 3, 12)),
      true
    );
    planner.enter_cell(Some(date(
      2024, 3, 10
    )));
    planner.release();

    let draft = planner
      .draft()
      .expect("draft open");
    assert_eq!(
      draft.start,
      date(2024, 3, 10)
    );
    assert_eq!(
      draft.end,
      date(2024, 3, 12)
    );
  }

  #[test]
  fn single_cell_selection_is_one_day()
   {
    let mut planner = march_planner();

    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.release();

    let draft = planner
      .draft()
      .expect("draft open");
    assert_eq!(
      draft.start, draft.end
    );
  }

  #[test]
  fn non_primary_or_blank_press_is_ignored()
   {
    let mut planner = march_planner();

    planner.press_cell(
      Some(date(2024, 3, 10)),
      false
    );
    assert!(planner
      .pointer()
      .is_idle());

    planner.press_cell(None, true);
    assert!(planner
      .pointer()
      .is_idle());

    planner.release();
    assert!(planner.draft().is_none());
  }

  #[test]
  fn submit_with_blank_name_keeps_dialog_open()
   {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.release();

    planner.set_draft_name("   ");
    planner.submit_draft();
    assert!(planner.draft().is_some());
    assert!(planner
      .store()
      .is_empty());

    planner.set_draft_name(
      "Design review"
    );
    planner.set_draft_category(
      Category::Review
    );
    planner.submit_draft();
    assert!(planner.draft().is_none());

    let tasks = planner.store().list();
    assert_eq!(tasks.len(), 1);
    assert_eq!(
      tasks[0].name,
      "Design review"
    );
    assert_eq!(
      tasks[0].category,
      Category::Review
    );
  }

  #[test]
  fn move_drag_shifts_the_whole_span()
  {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.enter_cell(Some(date(
      2024, 3, 12
    )));
    planner.release();
    planner
      .set_draft_name("Move me");
    planner.submit_draft();
    let id =
      planner.store().list()[0].id;

    planner.press_task(id, 12.0);
    assert_eq!(
      planner.drag_kind(),
      DragKind::Dragging
    );

    // March 2024 leads with 5
    // blanks, so cell index 10 is
    // March 6.
    planner
      .drag_to(cell_x(10), 700.0);
    let moved = planner
      .store()
      .get(id)
      .expect("task exists");
    assert_eq!(
      moved.start,
      date(2024, 3, 6)
    );
    assert_eq!(
      moved.end,
      date(2024, 3, 8)
    );

    planner.release();
    assert!(planner
      .pointer()
      .is_idle());
  }

  #[test]
  fn move_clamps_outside_the_grid() {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.release();
    planner
      .set_draft_name("Clamp me");
    planner.submit_draft();
    let id =
      planner.store().list()[0].id;

    planner.press_task(id, 0.0);
    planner
      .drag_to(999_999.0, 700.0);

    let moved = planner
      .store()
      .get(id)
      .expect("task exists");
    assert_eq!(
      moved.start,
      date(2024, 3, 31)
    );
  }

  #[test]
  fn move_over_blank_cells_is_dropped()
  {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.release();
    planner
      .set_draft_name("Stay put");
    planner.submit_draft();
    let id =
      planner.store().list()[0].id;

    planner.press_task(id, 0.0);
    // x near the origin maps to a
    // leading blank cell.
    planner.drag_to(-500.0, 700.0);

    let task = planner
      .store()
      .get(id)
      .expect("task exists");
    assert_eq!(
      task.start,
      date(2024, 3, 10)
    );
  }

  #[test]
  fn left_resize_past_end_is_rejected()
   {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.enter_cell(Some(date(
      2024, 3, 12
    )));
    planner.release();
    planner
      .set_draft_name("Resize me");
    planner.submit_draft();
    let id =
      planner.store().list()[0].id;

    planner.press_task_edge(
      id,
      DragEdge::Left
    );
    // Cell index 25 is March 21,
    // after the current end.
    planner
      .drag_to(cell_x(25), 700.0);
    let task = planner
      .store()
      .get(id)
      .expect("task exists");
    assert_eq!(
      task.start,
      date(2024, 3, 10)
    );
    assert_eq!(
      task.end,
      date(2024, 3, 12)
    );

    // The drag is still live; a
    // valid update goes through.
    planner
      .drag_to(cell_x(13), 700.0);
    let task = planner
      .store()
      .get(id)
      .expect("task exists");
    assert_eq!(
      task.start,
      date(2024, 3, 9)
    );
    assert_eq!(
      task.end,
      date(2024, 3, 12)
    );
  }

  #[test]
  fn right_resize_extends_the_end() {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.release();
    planner
      .set_draft_name("Stretch me");
    planner.submit_draft();
    let id =
      planner.store().list()[0].id;

    planner.press_task_edge(
      id,
      DragEdge::Right
    );
    planner
      .drag_to(cell_x(19), 700.0);
    let task = planner
      .store()
      .get(id)
      .expect("task exists");
    assert_eq!(
      task.start,
      date(2024, 3, 10)
    );
    assert_eq!(
      task.end,
      date(2024, 3, 15)
    );
  }

  #[test]
  fn gestures_are_mutually_exclusive()
  {
    let mut planner = march_planner();
    planner.press_cell(
      Some(date(2024, 3, 10)),
      true
    );
    planner.release();
    planner.set_draft_name("Busy");
    planner.submit_draft();
    let id =
      planner.store().list()[0].id;

    planner.press_task(id, 0.0);
    planner.press_cell(
      Some(date(2024, 3, 20)),
      true
    );
    assert!(matches!(
      planner.pointer(),
      PointerState::Moving { .. }
    ));

    planner.press_task_edge(
      id,
      DragEdge::Left
    );
    assert!(matches!(
      planner.pointer(),
      PointerState::Moving { .. }
    ));
  }

  #[test]
  fn month_navigation_rebuilds_the_grid()
   {
    let mut planner = march_planner();
    assert_eq!(
      planner.month_title(),
      "March 2024"
    );
    assert_eq!(
      planner.grid().len(),
      36
    );

    planner.goto_next_month();
    assert_eq!(
      planner.month_title(),
      "April 2024"
    );
    // April 2024 opens on a Monday.
    assert_eq!(
      planner.grid().cells()[0],
      CalendarCell::Blank
    );
    assert_eq!(
      planner.grid().date_at(1),
      Some(date(2024, 4, 1))
    );

    planner.goto_prev_month();
    planner.goto_prev_month();
    assert_eq!(
      planner.month_title(),
      "February 2024"
    );

    planner
      .goto_today(date(2024, 3, 5));
    assert_eq!(
      planner.month_title(),
      "March 2024"
    );
  }
}
