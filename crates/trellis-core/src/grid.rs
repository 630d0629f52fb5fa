use chrono::{
  Datelike,
  Duration,
  NaiveDate
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

/// Weekday columns, Sunday first.
pub const GRID_COLUMNS: usize = 7;

pub const WEEKDAY_LABELS: [&str; 7] = [
  "Sun", "Mon", "Tue", "Wed", "Thu",
  "Fri", "Sat"
];

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum CalendarCell {
  Blank,
  Day(NaiveDate)
}

impl CalendarCell {
  pub fn date(
    &self
  ) -> Option<NaiveDate> {
    match self {
      | Self::Blank => None,
      | Self::Day(date) => Some(*date)
    }
  }
}

/// One month of cells: leading blanks
/// align day one under its weekday
/// column; the tail row is left short.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct MonthGrid {
  first: NaiveDate,
  cells: Vec<CalendarCell>
}

impl MonthGrid {
  pub fn for_month(
    reference: NaiveDate
  ) -> Self {
    let first = first_day_of_month(
      reference.year(),
      reference.month()
    );
    let leading = first
      .weekday()
      .num_days_from_sunday()
      as usize;
    let day_count = days_in_month(
      reference.year(),
      reference.month()
    ) as usize;

    let mut cells = Vec::with_capacity(
      leading + day_count
    );
    for _ in 0..leading {
      cells.push(CalendarCell::Blank);
    }
    for offset in 0..day_count {
      cells.push(CalendarCell::Day(
        add_days(first, offset as i64)
      ));
    }

    trace!(
      month = %first.format("%Y-%m"),
      leading,
      day_count,
      "built month grid"
    );

    Self {
      first,
      cells
    }
  }

  pub fn first_day(&self) -> NaiveDate {
    self.first
  }

  pub fn cells(
    &self
  ) -> &[CalendarCell] {
    &self.cells
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn date_at(
    &self,
    index: usize
  ) -> Option<NaiveDate> {
    self
      .cells
      .get(index)
      .and_then(CalendarCell::date)
  }

  /// Maps a horizontal pixel offset
  /// inside the grid to a cell index.
  /// Out-of-range positions clamp to
  /// the nearest valid index.
  pub fn day_index_at_x(
    &self,
    x: f64,
    grid_width: f64
  ) -> usize {
    if self.cells.is_empty() {
      return 0;
    }
    let last = self.cells.len() - 1;
    if grid_width <= 0.0 {
      return 0;
    }

    let column_width = grid_width
      / GRID_COLUMNS as f64;
    let raw =
      (x / column_width).floor();
    if raw < 0.0 {
      0
    } else if raw >= last as f64 {
      last
    } else {
      raw as usize
    }
  }
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn month_title(
  date: NaiveDate
) -> String {
  date.format("%B %Y").to_string()
}
