use trellis_core::session::TaskDraft;
use trellis_core::task::Category;
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub draft: TaskDraft,
  pub on_name_input:
    Callback<web_sys::InputEvent>,
  pub on_category_change:
    Callback<web_sys::Event>,
  pub on_submit:
    Callback<MouseEvent>,
  pub on_cancel:
    Callback<MouseEvent>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let duration = format!(
    "{} - {}",
    props
      .draft
      .start
      .format("%b %d, %Y"),
    props.draft.end.format("%b %d, %Y")
  );

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">
                  <span>{ "Create Task" }</span>
                  <button class="modal-close" onclick={props.on_cancel.clone()}>{ "\u{d7}" }</button>
              </div>
              <div class="content">
                  <div class="field">
                      <label>{ "Task Name" }</label>
                      <input
                          value={props.draft.name.clone()}
                          placeholder="Enter task name..."
                          autofocus={true}
                          oninput={props.on_name_input.clone()}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Category" }</label>
                      <select value={props.draft.category.as_key()} onchange={props.on_category_change.clone()}>
                          {
                              for Category::ALL.into_iter().map(|category| html! {
                                  <option
                                      value={category.as_key()}
                                      selected={category == props.draft.category}
                                  >
                                      { category.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="field duration">
                      { format!("Duration: {duration}") }
                  </div>
                  <div class="footer">
                      <button
                          class="btn primary"
                          disabled={!props.draft.can_submit()}
                          onclick={props.on_submit.clone()}
                      >
                          { "Create Task" }
                      </button>
                      <button class="btn" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
                  </div>
              </div>
          </div>
      </div>
  }
}
