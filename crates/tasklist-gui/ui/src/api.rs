use serde::{Serialize, de::DeserializeOwned};
use tasklist_gui_shared::{ActionResultDto, ScreenDto, TaskAddArgs, TaskIdArg, TaskView, ViewSelectArgs};
use tauri_wasm::{args, invoke};
use uuid::Uuid;

/// Envelope matching the backend command signatures: `args` plus a
/// `request_id` that shows up in backend spans.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, A: ?Sized> {
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<&'a A>,
    request_id: String,
}

pub async fn invoke_tauri<R, A>(cmd: &str, args_payload: Option<&A>) -> Result<R, String>
where
    R: DeserializeOwned,
    A: Serialize + ?Sized,
{
    let envelope = Envelope {
        args: args_payload,
        request_id: Uuid::new_v4().to_string(),
    };
    let payload = args(&envelope).map_err(|e| format!("failed to encode args: {e}"))?;
    let value = invoke(cmd)
        .with_args(payload)
        .await
        .map_err(|e| format!("invoke error: {e:?}"))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| format!("decode error: {e}"))
}

pub async fn screen_render() -> Result<ScreenDto, String> {
    invoke_tauri::<ScreenDto, ()>("screen_render", None).await
}

pub async fn task_add(name: String) -> Result<ActionResultDto, String> {
    invoke_tauri("task_add", Some(&TaskAddArgs { name })).await
}

pub async fn task_toggle(id: Uuid) -> Result<ActionResultDto, String> {
    invoke_tauri("task_toggle", Some(&TaskIdArg { id })).await
}

pub async fn task_delete(id: Uuid) -> Result<ActionResultDto, String> {
    invoke_tauri("task_delete", Some(&TaskIdArg { id })).await
}

pub async fn view_select(view: TaskView) -> Result<ActionResultDto, String> {
    invoke_tauri("view_select", Some(&ViewSelectArgs { view })).await
}

#[derive(Serialize)]
struct UiLogArg<'a> {
    event: &'a str,
    detail: &'a str,
    level: &'a str,
}

/// Fire-and-forget report to the backend log.
pub fn ui_log(event: &'static str, detail: String, level: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        let arg = UiLogArg {
            event,
            detail: &detail,
            level,
        };
        if let Err(err) = invoke_tauri::<(), _>("ui_log", Some(&arg)).await {
            tracing::warn!(error = %err, event, "ui_log failed");
        }
    });
}
