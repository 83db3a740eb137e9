use std::cell::RefCell;
use std::rc::Rc;

use tasklist_gui_shared::{
  ActionResultDto,
  DialogDto,
  ScreenDto,
  TaskView
};
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::api;
use crate::components::{
  TaskInput,
  TaskList,
  ViewTabs,
  WarningDialog
};

#[derive(Clone)]
struct Handles {
  screen: UseStateHandle<Option<ScreenDto>>,
  input:  UseStateHandle<String>,
  dialog: UseStateHandle<Option<DialogDto>>,
  shown:  Rc<RefCell<u64>>
}

impl Handles {
  fn apply(
    &self,
    result: ActionResultDto
  ) {
    tracing::debug!(
      active = ?result.screen.active,
      rows = result.screen.rows.len(),
      clear_input = result.clear_input,
      has_dialog = result.dialog.is_some(),
      "applying action result"
    );
    if result.clear_input {
      self.input.set(String::new());
    }
    if let Some(dialog) = result.dialog {
      self.dialog.set(Some(dialog));
    }
    self.show_screen(result.screen);
  }

  fn show_screen(
    &self,
    screen: ScreenDto
  ) {
    let mut shown =
      self.shown.borrow_mut();
    if screen.is_older_than(*shown) {
      tracing::debug!(
        revision = screen.revision,
        shown = *shown,
        "dropping out-of-order screen"
      );
      return;
    }
    *shown = screen.revision;
    self.screen.set(Some(screen));
  }

  fn report(
    &self,
    command: &'static str,
    err: String
  ) {
    tracing::error!(command, error = %err, "command failed");
    api::ui_log(command, err, "error");
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let handles = Handles {
    screen: use_state(|| None::<ScreenDto>),
    input:  use_state(String::new),
    dialog: use_state(|| None::<DialogDto>),
    shown:  use_mut_ref(|| 0_u64)
  };
  let startup_failed =
    use_state(|| false);

  {
    let handles = handles.clone();
    let startup_failed =
      startup_failed.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::screen_render().await
          {
            | Ok(screen) => {
              tracing::info!(
                rows = screen.rows.len(),
                "initial screen loaded"
              );
              handles.show_screen(screen);
            }
            | Err(err) => {
              handles.report(
                "screen_render",
                err
              );
              startup_failed.set(true);
              handles.dialog.set(Some(
                DialogDto::startup_failure()
              ));
            }
          }
        }
      );
      || ()
    });
  }

  let on_input = {
    let input = handles.input.clone();
    Callback::from(move |value: String| {
      input.set(value)
    })
  };

  let on_submit = {
    let handles = handles.clone();
    Callback::from(move |()| {
      let handles = handles.clone();
      let name = (*handles.input).clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::task_add(name).await {
            | Ok(result) => {
              handles.apply(result)
            }
            | Err(err) => {
              handles.report("task_add", err)
            }
          }
        }
      );
    })
  };

  let on_toggle = {
    let handles = handles.clone();
    Callback::from(move |id: Uuid| {
      let handles = handles.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::task_toggle(id).await
          {
            | Ok(result) => {
              handles.apply(result)
            }
            | Err(err) => handles
              .report("task_toggle", err)
          }
        }
      );
    })
  };

  let on_delete = {
    let handles = handles.clone();
    Callback::from(move |id: Uuid| {
      let handles = handles.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::task_delete(id).await
          {
            | Ok(result) => {
              handles.apply(result)
            }
            | Err(err) => handles
              .report("task_delete", err)
          }
        }
      );
    })
  };

  let on_select = {
    let handles = handles.clone();
    Callback::from(
      move |view: TaskView| {
        let handles = handles.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::view_select(view)
              .await
            {
              | Ok(result) => {
                handles.apply(result)
              }
              | Err(err) => handles
                .report("view_select", err)
            }
          }
        );
      }
    )
  };

  let on_close_dialog = {
    let dialog = handles.dialog.clone();
    Callback::from(
      move |_: MouseEvent| {
        dialog.set(None)
      }
    )
  };

  let dialog = (*handles.dialog)
    .clone()
    .map(|dialog| {
      html! {
          <WarningDialog dialog={dialog} on_close={on_close_dialog} />
      }
    })
    .unwrap_or_default();

  if *startup_failed {
    return html! {
        <div class="window">
            { dialog }
        </div>
    };
  }

  let Some(screen) =
    (*handles.screen).clone()
  else {
    return html! {
        <div class="window"></div>
    };
  };

  html! {
      <div class="window">
          <TaskInput
              value={(*handles.input).clone()}
              placeholder={screen.placeholder.clone()}
              submit_label={screen.submit_label.clone()}
              on_input={on_input}
              on_submit={on_submit}
          />
          <ViewTabs tabs={screen.tabs.clone()} on_select={on_select} />
          <TaskList
              rows={screen.rows.clone()}
              on_toggle={on_toggle}
              on_delete={on_delete}
          />
          { dialog }
      </div>
  }
}
