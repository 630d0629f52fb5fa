use trellis_core::controller::DragEdge;
use trellis_core::task::Task;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::category_color_class;

#[derive(Properties, PartialEq)]
pub struct TaskBarProps {
  pub task:     Task,
  pub is_start: bool,
  pub is_end:   bool,
  pub on_press:
    Callback<(Uuid, f64)>,
  pub on_press_edge:
    Callback<(Uuid, DragEdge)>
}

/// One day-cell segment of a task's
/// bar. The label rides only on the
/// start segment; resize handles sit
/// on the outer edges of the span.
#[function_component(TaskBar)]
pub fn task_bar(
  props: &TaskBarProps
) -> Html {
  let task_id = props.task.id;

  let onmousedown = {
    let on_press =
      props.on_press.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        if event.button() != 0 {
          return;
        }
        let grab_offset_px = event
          .current_target()
          .and_then(|target| {
            target
              .dyn_into::<Element>()
              .ok()
          })
          .map(|bar| {
            f64::from(
              event.client_x()
            ) - bar
              .get_bounding_client_rect()
              .left()
          })
          .unwrap_or_default();
        on_press.emit((
          task_id,
          grab_offset_px
        ));
      }
    )
  };

  let edge_handle = |edge: DragEdge,
                     class: &'static str| {
    let on_press_edge =
      props.on_press_edge.clone();
    let onmousedown = Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        if event.button() != 0 {
          return;
        }
        on_press_edge
          .emit((task_id, edge));
      }
    );
    html! {
        <div class={classes!("bar-handle", class)} {onmousedown}></div>
    }
  };

  html! {
      <div
          class={classes!("task-bar", category_color_class(props.task.category))}
          title={props.task.name.clone()}
          {onmousedown}
      >
          {
              if props.is_start {
                  html! {
                      <>
                          { edge_handle(DragEdge::Left, "left") }
                          <span class="bar-label">{ &props.task.name }</span>
                      </>
                  }
              } else {
                  html! {}
              }
          }
          {
              if props.is_end {
                  edge_handle(DragEdge::Right, "right")
              } else {
                  html! {}
              }
          }
      </div>
  }
}
