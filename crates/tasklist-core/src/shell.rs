use tracing::{debug, info};

use crate::filter::ViewKind;
use crate::render::{self, Dialog, Screen};
use crate::store::TaskStore;
use crate::task::TaskId;

/// A single discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    Toggle(TaskId),
    Delete(TaskId),
    SelectView(ViewKind),
}

/// Result of dispatching one action: the fresh render of the active tab,
/// plus any modal to show and whether the input field should be cleared.
///
/// `revision` orders outcomes: a higher revision was rendered later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub revision: u64,
    pub screen: Screen,
    pub dialog: Option<Dialog>,
    pub clear_input: bool,
}

/// Owns the store and the active tab. All mutations go through
/// `dispatch`, which always re-renders afterwards.
#[derive(Debug)]
pub struct Shell {
    store: TaskStore,
    active: ViewKind,
    screen: Screen,
    revision: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        let store = TaskStore::new();
        let active = ViewKind::All;
        let screen = render::render(&store, active);
        debug!("shell constructed with All tab selected");
        Self {
            store,
            active,
            screen,
            revision: 0,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn active_view(&self) -> ViewKind {
        self.active
    }

    /// Last render. Never stale: every `dispatch` replaces it.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Number of dispatched actions; identifies the current `screen`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[tracing::instrument(skip(self), fields(active = %self.active))]
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let mut dialog = None;
        let mut clear_input = false;

        match action {
            Action::Submit(name) => match self.store.add(&name) {
                Ok(_) => {
                    self.active = ViewKind::All;
                    clear_input = true;
                }
                Err(err) if err.is_user_visible() => {
                    info!(error = %err, "showing duplicate warning");
                    dialog = Some(Dialog::duplicate_task());
                }
                Err(err) => debug!(error = %err, "ignoring rejected add"),
            },
            Action::Toggle(id) => {
                self.store.toggle(id);
            }
            Action::Delete(id) => {
                self.store.remove(id);
            }
            Action::SelectView(kind) => {
                self.active = kind;
            }
        }

        self.revision += 1;
        self.rerender();
        Outcome {
            revision: self.revision,
            screen: self.screen.clone(),
            dialog,
            clear_input,
        }
    }

    fn rerender(&mut self) {
        self.screen = render::render(&self.store, self.active);
        debug!(
            active = %self.active,
            rows = self.screen.rows.len(),
            revision = self.revision,
            total = self.store.len(),
            "re-rendered active view"
        );
    }
}
