use tasklist_gui_shared::{
  ActionResultDto,
  ScreenDto,
  TaskAddArgs,
  TaskIdArg,
  ViewSelectArgs
};
use tauri::State;
use tracing::{
  info,
  instrument
};

use crate::state::AppState;

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id))]
pub async fn screen_render(
  state: State<'_, AppState>,
  request_id: Option<String>
) -> Result<ScreenDto, String> {
  info!(request_id = ?request_id, "screen_render command invoked");
  Ok(state.screen())
}

#[tauri::command]
#[instrument(skip(state, args), fields(request_id = ?request_id, name_len = args.name.len()))]
pub async fn task_add(
  state: State<'_, AppState>,
  args: TaskAddArgs,
  request_id: Option<String>
) -> Result<ActionResultDto, String> {
  info!(
    request_id = ?request_id,
    name_len = args.name.len(),
    "task_add command invoked"
  );
  let result = state.add(args.name);
  if result.dialog.is_some() {
    info!(request_id = ?request_id, "task_add rejected as duplicate");
  }
  Ok(result)
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, id = %args.id))]
pub async fn task_toggle(
  state: State<'_, AppState>,
  args: TaskIdArg,
  request_id: Option<String>
) -> Result<ActionResultDto, String> {
  info!(request_id = ?request_id, id = %args.id, "task_toggle command invoked");
  Ok(state.toggle(args.id))
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, id = %args.id))]
pub async fn task_delete(
  state: State<'_, AppState>,
  args: TaskIdArg,
  request_id: Option<String>
) -> Result<ActionResultDto, String> {
  info!(request_id = ?request_id, id = %args.id, "task_delete command invoked");
  Ok(state.delete(args.id))
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, view = ?args.view))]
pub async fn view_select(
  state: State<'_, AppState>,
  args: ViewSelectArgs,
  request_id: Option<String>
) -> Result<ActionResultDto, String> {
  info!(request_id = ?request_id, view = ?args.view, "view_select command invoked");
  Ok(state.select(args.view))
}
