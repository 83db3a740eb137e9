//! Toolkit-independent view-model of the single window.
//!
//! A `Screen` is rebuilt from the store on every render. Widgets draw it
//! as-is and report user actions back by `TaskId` and `ViewKind`.

use serde::Serialize;

use crate::filter::{self, ViewCounts, ViewKind};
use crate::store::TaskStore;
use crate::task::{Task, TaskId};

pub const SUBMIT_LABEL: &str = "Add Task";
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";
pub const DELETE_LABEL: &str = "X";

pub const WARNING_TITLE: &str = "Oops!";
pub const DUPLICATE_MESSAGE: &str = "Task is duplicated!";
pub const STARTUP_FAILURE_MESSAGE: &str = "Error! Connect with IT department.";
pub const ACKNOWLEDGE_LABEL: &str = "OK";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub placeholder: &'static str,
    pub submit_label: &'static str,
}

impl Default for InputView {
    fn default() -> Self {
        Self {
            placeholder: INPUT_PLACEHOLDER,
            submit_label: SUBMIT_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub kind: ViewKind,
    pub label: &'static str,
    pub active: bool,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
    pub strike_through: bool,
    pub delete_label: &'static str,
}

impl RowView {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_string(),
            completed: task.is_completed(),
            strike_through: task.is_completed(),
            delete_label: DELETE_LABEL,
        }
    }
}

/// Everything the window shows for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub input: InputView,
    pub tabs: [TabView; 3],
    pub active: ViewKind,
    pub rows: Vec<RowView>,
}

impl Screen {
    pub fn active_tab(&self) -> &TabView {
        self.tabs
            .iter()
            .find(|tab| tab.active)
            .unwrap_or(&self.tabs[0])
    }

    pub fn row(&self, id: TaskId) -> Option<&RowView> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn row_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.name.as_str()).collect()
    }
}

/// Renders the `active` view of `store` from scratch.
#[tracing::instrument(skip(store), fields(total = store.len()))]
pub fn render(store: &TaskStore, active: ViewKind) -> Screen {
    let counts = filter::counts(store);
    let rows = filter::filter(store, active)
        .into_iter()
        .map(RowView::from_task)
        .collect();

    Screen {
        input: InputView::default(),
        tabs: ViewKind::ALL.map(|kind| tab_view(kind, active, &counts)),
        active,
        rows,
    }
}

fn tab_view(kind: ViewKind, active: ViewKind, counts: &ViewCounts) -> TabView {
    TabView {
        kind,
        label: kind.label(),
        active: kind == active,
        count: counts.get(kind),
    }
}

/// Modal message with a single acknowledgement action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialog {
    pub title: &'static str,
    pub message: &'static str,
    pub acknowledge_label: &'static str,
}

impl Dialog {
    pub fn duplicate_task() -> Self {
        Self {
            title: WARNING_TITLE,
            message: DUPLICATE_MESSAGE,
            acknowledge_label: ACKNOWLEDGE_LABEL,
        }
    }

    pub fn startup_failure() -> Self {
        Self {
            title: WARNING_TITLE,
            message: STARTUP_FAILURE_MESSAGE,
            acknowledge_label: ACKNOWLEDGE_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dialog, render};
    use crate::filter::ViewKind;
    use crate::store::TaskStore;

    #[test]
    fn empty_store_renders_three_tabs_with_all_active() {
        let screen = render(&TaskStore::new(), ViewKind::All);
        let labels: Vec<_> = screen.tabs.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["All", "Done", "Undone"]);
        assert_eq!(screen.tabs.iter().filter(|t| t.active).count(), 1);
        assert_eq!(screen.active_tab().kind, ViewKind::All);
        assert!(screen.rows.is_empty());
        assert_eq!(screen.input.submit_label, "Add Task");
    }

    #[test]
    fn rows_strike_through_exactly_the_completed_tasks() {
        let mut store = TaskStore::new();
        let a = store.add("a").expect("add");
        store.add("b").expect("add");
        store.toggle(a);

        let screen = render(&store, ViewKind::All);
        for row in &screen.rows {
            assert_eq!(row.strike_through, row.completed);
            assert_eq!(row.delete_label, "X");
        }
        assert!(screen.row(a).expect("row a").strike_through);
    }

    #[test]
    fn tabs_carry_counts_and_single_active_flag() {
        let mut store = TaskStore::new();
        let a = store.add("a").expect("add");
        store.add("b").expect("add");
        store.toggle(a);

        let screen = render(&store, ViewKind::Done);
        assert_eq!(screen.row_names(), vec!["a"]);
        let active: Vec<_> = screen
            .tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.kind)
            .collect();
        assert_eq!(active, vec![ViewKind::Done]);
        assert_eq!(
            screen.tabs.iter().map(|t| t.count).collect::<Vec<_>>(),
            vec![2, 1, 1]
        );
    }

    #[test]
    fn duplicate_dialog_uses_fixed_text() {
        let dialog = Dialog::duplicate_task();
        assert_eq!(dialog.title, "Oops!");
        assert_eq!(dialog.message, "Task is duplicated!");
        assert_eq!(dialog.acknowledge_label, "OK");
    }

    #[test]
    fn startup_failure_dialog_is_generic() {
        let dialog = Dialog::startup_failure();
        assert_eq!(dialog.title, "Oops!");
        assert_eq!(dialog.message, "Error! Connect with IT department.");
        assert_eq!(dialog.acknowledge_label, "OK");
    }
}
