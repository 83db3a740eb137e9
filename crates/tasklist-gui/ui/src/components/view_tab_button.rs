use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ViewTabButtonProps {
  pub label:     String,
  pub count:     usize,
  pub is_active: bool,
  pub onclick:   Callback<MouseEvent>
}

#[function_component(ViewTabButton)]
pub fn view_tab_button(
  props: &ViewTabButtonProps
) -> Html {
  html! {
      <button
          class={if props.is_active { "view-tab active" } else { "view-tab" }}
          onclick={props.onclick.clone()}
      >
          { props.label.clone() }
          <span class="count">{ props.count }</span>
      </button>
  }
}
