use tasklist_gui_shared::TaskRowDto;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<TaskRowDto>,
  pub on_toggle: Callback<Uuid>,
  pub on_delete: Callback<Uuid>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.id.to_string();
                  html! {
                      <TaskListRow
                          {key}
                          row={row}
                          on_toggle={props.on_toggle.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
