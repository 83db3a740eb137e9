use parking_lot::Mutex;
use tasklist_core::config::{Config, WindowConfig};
use tasklist_core::render::{Dialog, Screen};
use tasklist_core::{Action, Outcome, Shell, TaskId, ViewKind};
use tasklist_gui_shared::{
    ActionResultDto, DialogDto, ScreenDto, TaskRowDto, TaskView, ViewTabDto,
};
use tracing::{debug, instrument};
use uuid::Uuid;

pub struct AppState {
    shell: Mutex<Shell>,
    pub window: WindowConfig,
}

impl AppState {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let window = cfg.window()?;
        debug!(?window, "resolved window settings");
        Ok(Self {
            shell: Mutex::new(Shell::new()),
            window,
        })
    }

    #[instrument(skip(self))]
    pub fn screen(&self) -> ScreenDto {
        let shell = self.shell.lock();
        screen_to_dto(shell.revision(), shell.screen())
    }

    #[instrument(skip(self, name), fields(name_len = name.len()))]
    pub fn add(&self, name: String) -> ActionResultDto {
        self.dispatch(Action::Submit(name))
    }

    #[instrument(skip(self))]
    pub fn toggle(&self, id: Uuid) -> ActionResultDto {
        self.dispatch(Action::Toggle(TaskId::from(id)))
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: Uuid) -> ActionResultDto {
        self.dispatch(Action::Delete(TaskId::from(id)))
    }

    #[instrument(skip(self))]
    pub fn select(&self, view: TaskView) -> ActionResultDto {
        self.dispatch(Action::SelectView(view_to_core(view)))
    }

    fn dispatch(&self, action: Action) -> ActionResultDto {
        let outcome = {
            let mut shell = self.shell.lock();
            shell.dispatch(action)
        };
        outcome_to_dto(outcome)
    }
}

fn view_to_core(view: TaskView) -> ViewKind {
    match view {
        TaskView::All => ViewKind::All,
        TaskView::Done => ViewKind::Done,
        TaskView::Undone => ViewKind::Undone,
    }
}

fn view_from_core(kind: ViewKind) -> TaskView {
    match kind {
        ViewKind::All => TaskView::All,
        ViewKind::Done => TaskView::Done,
        ViewKind::Undone => TaskView::Undone,
    }
}

fn screen_to_dto(revision: u64, screen: &Screen) -> ScreenDto {
    ScreenDto {
        revision,
        placeholder: screen.input.placeholder.to_string(),
        submit_label: screen.input.submit_label.to_string(),
        tabs: screen
            .tabs
            .iter()
            .map(|tab| ViewTabDto {
                view: view_from_core(tab.kind),
                label: tab.label.to_string(),
                active: tab.active,
                count: tab.count,
            })
            .collect(),
        active: view_from_core(screen.active),
        rows: screen
            .rows
            .iter()
            .map(|row| TaskRowDto {
                id: row.id.as_uuid(),
                name: row.name.clone(),
                completed: row.completed,
                strike_through: row.strike_through,
                delete_label: row.delete_label.to_string(),
            })
            .collect(),
    }
}

fn dialog_to_dto(dialog: Dialog) -> DialogDto {
    DialogDto {
        title: dialog.title.to_string(),
        message: dialog.message.to_string(),
        acknowledge_label: dialog.acknowledge_label.to_string(),
    }
}

fn outcome_to_dto(outcome: Outcome) -> ActionResultDto {
    ActionResultDto {
        screen: screen_to_dto(outcome.revision, &outcome.screen),
        dialog: outcome.dialog.map(dialog_to_dto),
        clear_input: outcome.clear_input,
    }
}

#[cfg(test)]
mod tests {
    use tasklist_core::config::Config;
    use tasklist_gui_shared::TaskView;

    use super::AppState;

    #[test]
    fn commands_round_trip_through_the_shell() {
        let state = AppState::new(&Config::default()).expect("state");
        assert_eq!(state.window.title, "Todo List");

        let added = state.add("Buy milk".to_string());
        assert!(added.clear_input);
        assert_eq!(added.screen.rows.len(), 1);
        let id = added.screen.rows[0].id;
        assert_eq!(added.screen.revision, 1);

        let dup = state.add("buy milk".to_string());
        let dialog = dup.dialog.expect("duplicate dialog");
        assert_eq!(dialog.title, "Oops!");
        assert_eq!(dialog.message, "Task is duplicated!");

        let toggled = state.toggle(id);
        let done = state.select(TaskView::Done);
        assert!(toggled.screen.is_older_than(done.screen.revision));
        assert_eq!(done.screen.active, TaskView::Done);
        assert!(done.screen.rows[0].strike_through);

        let after_delete = state.delete(id);
        assert!(after_delete.screen.rows.is_empty());
        assert_eq!(state.screen().active, TaskView::Done);
        assert_eq!(state.screen().revision, after_delete.screen.revision);
    }
}
