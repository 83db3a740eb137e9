use tasklist_gui_shared::TaskRowDto;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRowDto,
  pub on_toggle: Callback<Uuid>,
  pub on_delete: Callback<Uuid>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <div class="task-row">
          <input
              type="checkbox"
              checked={props.row.completed}
              onclick={move |event: MouseEvent| {
                  // Checked state follows the
                  // backend's screen only.
                  event.prevent_default();
                  on_toggle.emit(id);
              }}
          />
          <span class={classes!("name", props.row.strike_through.then_some("done"))}>
              { &props.row.name }
          </span>
          <button
              class="btn danger"
              type="button"
              onclick={move |_: MouseEvent| on_delete.emit(id)}
          >
              { props.row.delete_label.clone() }
          </button>
      </div>
  }
}
