use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum DragEdge {
  Left,
  Right
}

/// Which global pointer tracking a
/// drag needs while it is live.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DragKind {
  /// No drag; no global listeners.
  None,
  /// Range selection; only the
  /// release must be observed
  /// globally (cell enters carry the
  /// rest).
  Selecting,
  /// Move or resize; every pointer
  /// move is mapped back onto the
  /// grid.
  Dragging
}

/// The one active pointer gesture.
/// The three non-idle variants are
/// mutually exclusive by
/// construction.
#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub enum PointerState {
  Idle,
  Selecting {
    anchor: NaiveDate,
    focus:  NaiveDate
  },
  Moving {
    task:           Uuid,
    grab_offset_px: f64,
    duration_days:  i64
  },
  Resizing {
    task: Uuid,
    edge: DragEdge
  }
}

impl PointerState {
  pub fn is_idle(&self) -> bool {
    matches!(self, Self::Idle)
  }

  pub fn kind(&self) -> DragKind {
    match self {
      | Self::Idle => DragKind::None,
      | Self::Selecting {
        ..
      } => DragKind::Selecting,
      | Self::Moving {
        ..
      }
      | Self::Resizing {
        ..
      } => DragKind::Dragging
    }
  }
}

/// A normalized, inclusive span of
/// calendar days.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct SelectionRange {
  pub start: NaiveDate,
  pub end:   NaiveDate
}

impl SelectionRange {
  pub fn normalized(
    anchor: NaiveDate,
    focus: NaiveDate
  ) -> Self {
    Self {
      start: anchor.min(focus),
      end:   anchor.max(focus)
    }
  }

  pub fn contains(
    &self,
    day: NaiveDate
  ) -> bool {
    self.start <= day
      && day <= self.end
  }
}
