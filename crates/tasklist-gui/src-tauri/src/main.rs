// Don't open a console window next to
// the app on Windows release builds.
#![cfg_attr(
  not(debug_assertions),
  windows_subsystem = "windows"
)]

mod commands;
mod state;

use anyhow::Context;
use rfd::{
  MessageButtons,
  MessageDialog,
  MessageLevel
};
use tasklist_core::config::{
  Config,
  WindowConfig
};
use tasklist_core::logging::init_tracing;
use tasklist_core::render::Dialog;
use tauri::Manager;
use tracing::{
  error,
  info,
  warn
};

fn main() {
  let cfg = match Config::load(None) {
    | Ok(cfg) => {
      init_tracing(&cfg.log_filter());
      cfg
    }
    | Err(err) => {
      init_tracing(
        tasklist_core::config::DEFAULT_LOG_FILTER
      );
      abort_startup(err.context(
        "failed to load tasklistrc"
      ));
    }
  };

  info!(
    loaded_files = ?cfg.loaded_files,
    "starting Tasklist GUI backend"
  );

  if let Err(err) = run(&cfg) {
    abort_startup(err);
  }
}

fn run(cfg: &Config) -> anyhow::Result<()> {
  let state = state::AppState::new(cfg)
    .context(
      "failed to initialize app state"
    )?;
  let window = state.window.clone();

  tauri::Builder::default()
    .setup(move |app| {
      configure_main_window(
        app, &window
      );
      install_signal_handlers(
        app.handle().clone()
      );
      Ok(())
    })
    .manage(state)
    .invoke_handler(
      tauri::generate_handler![
        commands::tasks::screen_render,
        commands::tasks::task_add,
        commands::tasks::task_toggle,
        commands::tasks::task_delete,
        commands::tasks::view_select,
        commands::common::ui_log,
      ]
    )
    .run(tauri::generate_context!())
    .context(
      "error while running Tasklist \
       GUI backend"
    )
}

/// Startup failures are not retried:
/// log the cause, show the generic
/// message in a modal box, exit.
fn abort_startup(
  err: anyhow::Error
) -> ! {
  error!(error = ?err, "initialization failed");
  let dialog = Dialog::startup_failure();
  eprintln!("{}", dialog.message);

  // Blocks until acknowledged.
  let _ = MessageDialog::new()
    .set_level(MessageLevel::Error)
    .set_title(dialog.title)
    .set_description(dialog.message)
    .set_buttons(
      MessageButtons::OkCustom(
        dialog
          .acknowledge_label
          .to_string()
      )
    )
    .show();
  std::process::exit(1);
}

fn configure_main_window<
  R: tauri::Runtime
>(
  app: &tauri::App<R>,
  window_cfg: &WindowConfig
) {
  let Some(window) =
    app.get_webview_window("main")
  else {
    warn!(
      "main window not found during \
       setup; keeping tauri.conf \
       defaults"
    );
    return;
  };

  if let Err(err) =
    window.set_title(&window_cfg.title)
  {
    error!(error = %err, "failed to set window title");
  }

  let size = tauri::LogicalSize::new(
    f64::from(window_cfg.width),
    f64::from(window_cfg.height)
  );
  match window.set_size(size) {
    | Ok(()) => {
      info!(
        title = %window_cfg.title,
        width = window_cfg.width,
        height = window_cfg.height,
        "configured main window"
      );
    }
    | Err(err) => {
      error!(error = %err, "failed to size main window");
    }
  }
}

fn install_signal_handlers(
  app_handle: tauri::AppHandle
) {
  tauri::async_runtime::spawn(
    async move {
      wait_for_shutdown_signal().await;
      warn!(
        "received shutdown signal; \
         exiting application"
      );
      app_handle.exit(0);
    }
  );
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
  use tokio::signal::unix::{
    SignalKind,
    signal
  };

  let mut sigint = match signal(
    SignalKind::interrupt()
  ) {
    | Ok(stream) => stream,
    | Err(error) => {
      error!(
        %error,
        "failed to register SIGINT \
         handler; falling back to \
         ctrl_c"
      );
      let _ =
        tokio::signal::ctrl_c().await;
      return;
    }
  };

  let mut sigterm = match signal(
    SignalKind::terminate()
  ) {
    | Ok(stream) => stream,
    | Err(error) => {
      error!(
        %error,
        "failed to register SIGTERM \
         handler; falling back to \
         ctrl_c"
      );
      let _ =
        tokio::signal::ctrl_c().await;
      return;
    }
  };

  tokio::select! {
    _ = sigint.recv() => {}
    _ = sigterm.recv() => {}
  }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
  if let Err(error) =
    tokio::signal::ctrl_c().await
  {
    error!(
      %error,
      "failed waiting for ctrl_c \
       signal"
    );
  }
}
