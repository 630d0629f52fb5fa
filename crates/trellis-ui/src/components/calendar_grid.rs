use chrono::{
  Datelike,
  NaiveDate
};
use trellis_core::controller::{
  DragEdge,
  SelectionRange
};
use trellis_core::filter::tasks_on_day;
use trellis_core::grid::{
  CalendarCell,
  WEEKDAY_LABELS
};
use trellis_core::task::Task;
use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  classes,
  function_component,
  html
};

use super::TaskBar;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
  pub grid_ref:  NodeRef,
  pub cells:     Vec<CalendarCell>,
  pub today:     NaiveDate,
  pub selection:
    Option<SelectionRange>,
  pub tasks:     Vec<Task>,
  pub bar_limit: usize,
  pub on_press_cell: Callback<(
    Option<NaiveDate>,
    i16
  )>,
  pub on_enter_cell:
    Callback<Option<NaiveDate>>,
  pub on_press_task:
    Callback<(Uuid, f64)>,
  pub on_press_task_edge:
    Callback<(Uuid, DragEdge)>
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(
  props: &CalendarGridProps
) -> Html {
  html! {
      <div class="calendar">
          <div class="calendar-weekday-row">
              {
                  for WEEKDAY_LABELS.iter().map(|label| html! {
                      <div class="calendar-weekday">{ *label }</div>
                  })
              }
          </div>
          <div class="calendar-grid" ref={props.grid_ref.clone()}>
              {
                  for props.cells.iter().map(|cell| {
                      let date = cell.date();
                      let selected = date
                          .zip(props.selection)
                          .is_some_and(|(day, range)| range.contains(day));
                      let is_today = date == Some(props.today);
                      let on_press_cell = props.on_press_cell.clone();
                      let on_enter_cell = props.on_enter_cell.clone();

                      let day_tasks = date
                          .map(|day| tasks_on_day(day, &props.tasks))
                          .unwrap_or_default();

                      html! {
                          <div
                              class={classes!(
                                  "calendar-cell",
                                  date.is_none().then_some("blank"),
                                  selected.then_some("selected"),
                              )}
                              onmousedown={Callback::from(move |event: MouseEvent| {
                                  on_press_cell.emit((date, event.button()));
                              })}
                              onmouseenter={Callback::from(move |_| on_enter_cell.emit(date))}
                          >
                              {
                                  if let Some(day) = date {
                                      html! {
                                          <>
                                              <div class={classes!("day-number", is_today.then_some("today"))}>
                                                  { day.day() }
                                              </div>
                                              <div class="day-bars">
                                                  {
                                                      for day_tasks.into_iter().take(props.bar_limit).map(|task| {
                                                          let is_start = task.start == day;
                                                          let is_end = task.end == day;
                                                          html! {
                                                              <TaskBar
                                                                  task={task}
                                                                  is_start={is_start}
                                                                  is_end={is_end}
                                                                  on_press={props.on_press_task.clone()}
                                                                  on_press_edge={props.on_press_task_edge.clone()}
                                                              />
                                                          }
                                                      })
                                                  }
                                              </div>
                                          </>
                                      }
                                  } else {
                                      html! {}
                                  }
                              }
                          </div>
                      }
                  })
              }
          </div>
      </div>
  }
}
