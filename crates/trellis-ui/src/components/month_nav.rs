use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MonthNavProps {
  pub title:    String,
  pub on_prev:  Callback<MouseEvent>,
  pub on_today: Callback<MouseEvent>,
  pub on_next:  Callback<MouseEvent>
}

#[function_component(MonthNav)]
pub fn month_nav(
  props: &MonthNavProps
) -> Html {
  html! {
      <div class="month-nav">
          <h2 class="month-title">{ props.title.clone() }</h2>
          <div class="actions">
              <button class="btn" onclick={props.on_prev.clone()}>{ "Previous" }</button>
              <button class="btn primary" onclick={props.on_today.clone()}>{ "Today" }</button>
              <button class="btn" onclick={props.on_next.clone()}>{ "Next" }</button>
          </div>
      </div>
  }
}
