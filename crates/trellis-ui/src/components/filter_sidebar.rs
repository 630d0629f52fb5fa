use trellis_core::filter::FilterState;
use trellis_core::task::Category;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::category_color_class;

#[derive(Properties, PartialEq)]
pub struct FilterSidebarProps {
  pub filters:      FilterState,
  pub time_windows: Vec<u32>,
  pub on_search_input:
    Callback<web_sys::InputEvent>,
  pub on_toggle_category:
    Callback<Category>,
  pub on_time_change:
    Callback<Option<u32>>
}

#[function_component(FilterSidebar)]
pub fn filter_sidebar(
  props: &FilterSidebarProps
) -> Html {
  html! {
      <div class="panel sidebar">
          <div class="header">{ "Filters" }</div>
          <div class="field">
              <label>{ "Search Tasks" }</label>
              <input
                  value={props.filters.search().to_string()}
                  placeholder="Search by name..."
                  oninput={props.on_search_input.clone()}
              />
          </div>
          <div class="field">
              <label>{ "Categories" }</label>
              {
                  for Category::ALL.into_iter().map(|category| {
                      let on_toggle_category = props.on_toggle_category.clone();
                      html! {
                          <label class="check-row">
                              <input
                                  type="checkbox"
                                  checked={props.filters.is_active(category)}
                                  onchange={Callback::from(move |_| on_toggle_category.emit(category))}
                              />
                              <span>{ category.label() }</span>
                              <span class={format!("swatch {}", category_color_class(category))}></span>
                          </label>
                      }
                  })
              }
          </div>
          <div class="field">
              <label>{ "Time Range" }</label>
              {
                  {
                      let on_time_change = props.on_time_change.clone();
                      html! {
                          <label class="check-row">
                              <input
                                  type="radio"
                                  name="time-window"
                                  checked={props.filters.weeks_ahead().is_none()}
                                  onchange={Callback::from(move |_| on_time_change.emit(None))}
                              />
                              <span>{ "All tasks" }</span>
                          </label>
                      }
                  }
              }
              {
                  for props.time_windows.iter().copied().map(|weeks| {
                      let on_time_change = props.on_time_change.clone();
                      let label = if weeks == 1 {
                          "Within 1 week".to_string()
                      } else {
                          format!("Within {weeks} weeks")
                      };
                      html! {
                          <label class="check-row">
                              <input
                                  type="radio"
                                  name="time-window"
                                  checked={props.filters.weeks_ahead() == Some(weeks)}
                                  onchange={Callback::from(move |_| on_time_change.emit(Some(weeks)))}
                              />
                              <span>{ label }</span>
                          </label>
                      }
                  })
              }
          </div>
      </div>
  }
}
