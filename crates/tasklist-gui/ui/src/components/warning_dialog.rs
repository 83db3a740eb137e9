use tasklist_gui_shared::DialogDto;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WarningDialogProps {
  pub dialog:   DialogDto,
  pub on_close: Callback<MouseEvent>
}

#[function_component(WarningDialog)]
pub fn warning_dialog(
  props: &WarningDialogProps
) -> Html {
  html! {
      <div class="modal-backdrop">
          <div
              class="modal"
              role="alertdialog"
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              <div class="header">{ props.dialog.title.clone() }</div>
              <div class="content">{ props.dialog.message.clone() }</div>
              <div class="footer">
                  <button
                      class="btn"
                      type="button"
                      onclick={props.on_close.clone()}
                  >
                      { props.dialog.acknowledge_label.clone() }
                  </button>
              </div>
          </div>
      </div>
  }
}
