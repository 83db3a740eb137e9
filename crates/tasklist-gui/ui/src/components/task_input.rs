use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub value:        String,
  pub placeholder:  String,
  pub submit_label: String,
  pub on_input:     Callback<String>,
  pub on_submit:    Callback<()>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let oninput = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  let onkeydown = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          on_submit.emit(());
        }
      }
    )
  };

  let onclick = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit.emit(())
      }
    )
  };

  html! {
      <div class="input-row">
          <input
              type="text"
              value={props.value.clone()}
              placeholder={props.placeholder.clone()}
              {oninput}
              {onkeydown}
          />
          <button class="btn" type="button" {onclick}>
              { props.submit_label.clone() }
          </button>
      </div>
  }
}
