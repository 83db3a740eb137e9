use serde::Deserialize;
use tracing::{
  info,
  instrument,
  warn
};

#[derive(Debug, Deserialize)]
pub struct UiLogArg {
  pub event:  String,
  pub detail: String,
  #[serde(default)]
  pub level:  Option<String>
}

#[tauri::command]
#[instrument(fields(request_id = ?request_id, event = %args.event))]
pub async fn ui_log(
  args: UiLogArg,
  request_id: Option<String>
) -> Result<(), String> {
  match args.level.as_deref() {
    | Some("warn") | Some("error") => {
      warn!(request_id = ?request_id, event = %args.event, detail = %args.detail, "ui problem reported");
    }
    | _ => {
      info!(request_id = ?request_id, event = %args.event, detail = %args.detail, "ui interaction");
    }
  }
  Ok(())
}
