use std::rc::Rc;

use chrono::{
  Local,
  NaiveDate
};
use gloo::events::EventListener;
use trellis_core::controller::{
  DragEdge,
  DragKind
};
use trellis_core::session::Planner;
use trellis_core::task::Category;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  HtmlInputElement,
  HtmlSelectElement,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Reducible,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_reducer,
  use_state
};

use crate::components::{
  CalendarGrid,
  FilterSidebar,
  MonthNav,
  TaskModal
};
use crate::config::load_planner_config;

fn local_today() -> NaiveDate {
  Local::now().date_naive()
}

/// One action per input event. The
/// reducer always applies against
/// the current session, so handlers
/// installed by earlier renders can
/// never act on stale state.
enum PlannerAction {
  PressCell {
    date:   Option<NaiveDate>,
    button: i16
  },
  EnterCell {
    date: Option<NaiveDate>
  },
  PressTask {
    id:             Uuid,
    grab_offset_px: f64
  },
  PressTaskEdge {
    id:   Uuid,
    edge: DragEdge
  },
  DragTo {
    x:          f64,
    grid_width: f64
  },
  Release,
  PrevMonth,
  NextMonth,
  GotoToday,
  SetSearch(String),
  ToggleCategory(Category),
  SetTimeWindow(Option<u32>),
  SetDraftName(String),
  SetDraftCategory(Category),
  SubmitDraft,
  CancelDraft
}

#[derive(Clone, PartialEq)]
struct PlannerSession {
  planner: Planner
}

impl Reducible for PlannerSession {
  type Action = PlannerAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut planner =
      self.planner.clone();
    match action {
      | PlannerAction::PressCell {
        date,
        button
      } => planner
        .press_cell(date, button == 0),
      | PlannerAction::EnterCell {
        date
      } => planner.enter_cell(date),
      | PlannerAction::PressTask {
        id,
        grab_offset_px
      } => planner
        .press_task(id, grab_offset_px),
      | PlannerAction::PressTaskEdge {
        id,
        edge
      } => planner
        .press_task_edge(id, edge),
      | PlannerAction::DragTo {
        x,
        grid_width
      } => {
        planner.drag_to(x, grid_width)
      }
      | PlannerAction::Release => {
        planner.release()
      }
      | PlannerAction::PrevMonth => {
        planner.goto_prev_month()
      }
      | PlannerAction::NextMonth => {
        planner.goto_next_month()
      }
      | PlannerAction::GotoToday => {
        planner
          .goto_today(local_today())
      }
      | PlannerAction::SetSearch(
        raw
      ) => planner.set_search(&raw),
      | PlannerAction::ToggleCategory(
        category
      ) => planner
        .toggle_category(category),
      | PlannerAction::SetTimeWindow(
        weeks
      ) => planner
        .set_weeks_ahead(weeks),
      | PlannerAction::SetDraftName(
        name
      ) => {
        planner.set_draft_name(&name)
      }
      | PlannerAction::SetDraftCategory(
        category
      ) => planner
        .set_draft_category(category),
      | PlannerAction::SubmitDraft => {
        planner.submit_draft()
      }
      | PlannerAction::CancelDraft => {
        planner.cancel_draft()
      }
    }
    Rc::new(Self {
      planner
    })
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_planner_config);
  let session = use_reducer(|| {
    PlannerSession {
      planner: Planner::new(
        local_today()
      )
    }
  });
  let grid_ref = use_node_ref();

  // Global pointer tracking exists
  // only while a drag is live; the
  // listeners drop the moment the
  // gesture ends.
  let drag_kind =
    session.planner.drag_kind();
  {
    let session = session.clone();
    let grid_ref = grid_ref.clone();
    use_effect_with(
      drag_kind,
      move |kind| {
        let mut listeners: Vec<
          EventListener
        > = Vec::new();

        if *kind != DragKind::None
          && let Some(window) =
            web_sys::window()
        {
          if *kind
            == DragKind::Dragging
          {
            let session =
              session.clone();
            let grid_ref =
              grid_ref.clone();
            listeners.push(
              EventListener::new(
                &window,
                "mousemove",
                move |event| {
                  let Some(event) =
                    event.dyn_ref::<MouseEvent>()
                  else {
                    return;
                  };
                  let Some(grid) =
                    grid_ref
                      .cast::<Element>()
                  else {
                    return;
                  };
                  let rect = grid
                    .get_bounding_client_rect();
                  session.dispatch(
                    PlannerAction::DragTo {
                      x: f64::from(
                        event
                          .client_x()
                      ) - rect.left(),
                      grid_width:
                        rect.width()
                    }
                  );
                }
              )
            );
          }

          listeners.push(
            EventListener::new(
              &window,
              "mouseup",
              move |_| {
                session.dispatch(
                  PlannerAction::Release
                );
              }
            )
          );
        }

        move || drop(listeners)
      }
    );
  }

  let today = local_today();
  let planner = &session.planner;
  let visible =
    planner.visible_tasks(today);

  let on_press_cell = {
    let session = session.clone();
    Callback::from(
      move |(date, button): (
        Option<NaiveDate>,
        i16
      )| {
        session.dispatch(
          PlannerAction::PressCell {
            date,
            button
          }
        );
      }
    )
  };
  let on_enter_cell = {
    let session = session.clone();
    Callback::from(
      move |date: Option<NaiveDate>| {
        session.dispatch(
          PlannerAction::EnterCell {
            date
          }
        );
      }
    )
  };
  let on_press_task = {
    let session = session.clone();
    Callback::from(
      move |(id, grab_offset_px): (
        Uuid,
        f64
      )| {
        session.dispatch(
          PlannerAction::PressTask {
            id,
            grab_offset_px
          }
        );
      }
    )
  };
  let on_press_task_edge = {
    let session = session.clone();
    Callback::from(
      move |(id, edge): (
        Uuid,
        DragEdge
      )| {
        session.dispatch(
          PlannerAction::PressTaskEdge {
            id,
            edge
          }
        );
      }
    )
  };

  let on_prev = {
    let session = session.clone();
    Callback::from(move |_| {
      session.dispatch(
        PlannerAction::PrevMonth
      )
    })
  };
  let on_today = {
    let session = session.clone();
    Callback::from(move |_| {
      session.dispatch(
        PlannerAction::GotoToday
      )
    })
  };
  let on_next = {
    let session = session.clone();
    Callback::from(move |_| {
      session.dispatch(
        PlannerAction::NextMonth
      )
    })
  };

  let on_search_input = {
    let session = session.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        let input: HtmlInputElement =
          event
            .target_unchecked_into();
        session.dispatch(
          PlannerAction::SetSearch(
            input.value()
          )
        );
      }
    )
  };
  let on_toggle_category = {
    let session = session.clone();
    Callback::from(
      move |category: Category| {
        session.dispatch(
          PlannerAction::ToggleCategory(
            category
          )
        );
      }
    )
  };
  let on_time_change = {
    let session = session.clone();
    Callback::from(
      move |weeks: Option<u32>| {
        session.dispatch(
          PlannerAction::SetTimeWindow(
            weeks
          )
        );
      }
    )
  };

  let on_draft_name_input = {
    let session = session.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        let input: HtmlInputElement =
          event
            .target_unchecked_into();
        session.dispatch(
          PlannerAction::SetDraftName(
            input.value()
          )
        );
      }
    )
  };
  let on_draft_category_change = {
    let session = session.clone();
    Callback::from(
      move |event: web_sys::Event| {
        let select: HtmlSelectElement =
          event
            .target_unchecked_into();
        if let Some(category) =
          Category::from_key(
            &select.value()
          )
        {
          session.dispatch(
            PlannerAction::SetDraftCategory(
              category
            )
          );
        }
      }
    )
  };
  let on_draft_submit = {
    let session = session.clone();
    Callback::from(move |_| {
      session.dispatch(
        PlannerAction::SubmitDraft
      )
    })
  };
  let on_draft_cancel = {
    let session = session.clone();
    Callback::from(move |_| {
      session.dispatch(
        PlannerAction::CancelDraft
      )
    })
  };

  html! {
      <div class="layout">
          <FilterSidebar
              filters={planner.filters().clone()}
              time_windows={config.policies.time_windows_weeks.clone()}
              on_search_input={on_search_input}
              on_toggle_category={on_toggle_category}
              on_time_change={on_time_change}
          />
          <div class="panel planner-panel">
              <MonthNav
                  title={planner.month_title()}
                  on_prev={on_prev}
                  on_today={on_today}
                  on_next={on_next}
              />
              <CalendarGrid
                  grid_ref={grid_ref}
                  cells={planner.grid().cells().to_vec()}
                  today={today}
                  selection={planner.selection()}
                  tasks={visible}
                  bar_limit={config.policies.bar_limit}
                  on_press_cell={on_press_cell}
                  on_enter_cell={on_enter_cell}
                  on_press_task={on_press_task}
                  on_press_task_edge={on_press_task_edge}
              />
              <div class="tip">
                  { "Tip: drag across days to create a task, drag a bar to move it, drag its edges to resize." }
              </div>
          </div>
          {
              if let Some(draft) = planner.draft().cloned() {
                  html! {
                      <TaskModal
                          draft={draft}
                          on_name_input={on_draft_name_input}
                          on_category_change={on_draft_category_change}
                          on_submit={on_draft_submit}
                          on_cancel={on_draft_cancel}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
