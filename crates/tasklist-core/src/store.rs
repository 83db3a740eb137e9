use tracing::{debug, info};

use crate::error::AddError;
use crate::task::{Task, TaskId};

/// Ordered, in-memory collection of every task.
///
/// Index 0 is the most recently added task. No two tasks share a name
/// under case-insensitive comparison.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self, name), fields(name_len = name.len()))]
    pub fn add(&mut self, name: &str) -> Result<TaskId, AddError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring empty task name");
            return Err(AddError::EmptyInput);
        }

        if self.is_duplicate(name) {
            info!(name, "rejected duplicate task");
            return Err(AddError::DuplicateTask {
                name: name.to_string(),
            });
        }

        let task = Task::new(name.to_string());
        let id = task.id();
        self.tasks.insert(0, task);

        info!(id = %id, name, total = self.tasks.len(), "added task");
        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let Some(idx) = self.position(id) else {
            debug!("remove ignored; task not present");
            return None;
        };

        let task = self.tasks.remove(idx);
        info!(name = task.name(), total = self.tasks.len(), "removed task");
        Some(task)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            debug!("toggle ignored; task not present");
            return None;
        };

        let completed = task.toggle();
        info!(name = task.name(), completed, "toggled task");
        Some(completed)
    }

    /// Case-insensitive check of `name` (trimmed) against every task.
    pub fn is_duplicate(&self, name: &str) -> bool {
        let name = name.trim();
        self.tasks.iter().any(|t| names_match(t.name(), name))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::{TaskStore, names_match};
    use crate::error::AddError;
    use crate::task::TaskId;

    fn names(store: &TaskStore) -> Vec<&str> {
        store.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn add_inserts_at_front() {
        let mut store = TaskStore::new();
        store.add("A").expect("add A");
        store.add("B").expect("add B");
        store.add("C").expect("add C");
        assert_eq!(names(&store), vec!["C", "B", "A"]);
    }

    #[test]
    fn add_trims_before_storing() {
        let mut store = TaskStore::new();
        let id = store.add("   Buy milk \t").expect("add");
        assert_eq!(store.get(id).map(|t| t.name()), Some("Buy milk"));
    }

    #[test]
    fn empty_and_blank_names_are_rejected_without_change() {
        let mut store = TaskStore::new();
        assert_eq!(store.add(""), Err(AddError::EmptyInput));
        assert_eq!(store.add("   "), Err(AddError::EmptyInput));
        assert_eq!(store.add("\n\t"), Err(AddError::EmptyInput));
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_check_ignores_case_and_padding() {
        let mut store = TaskStore::new();
        store.add("Buy milk").expect("add");
        let err = store.add("  bUY MILK ").expect_err("duplicate");
        assert_eq!(
            err,
            AddError::DuplicateTask {
                name: "bUY MILK".to_string()
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_check_covers_every_task_not_just_the_oldest() {
        let mut store = TaskStore::new();
        store.add("first").expect("add");
        store.add("second").expect("add");
        store.add("third").expect("add");

        assert!(store.is_duplicate("SECOND"));
        assert!(store.is_duplicate("Third"));
        assert!(matches!(
            store.add("second"),
            Err(AddError::DuplicateTask { .. })
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn unicode_names_compare_case_insensitively() {
        assert!(names_match("Äpfel kaufen", "äpfel KAUFEN"));
        assert!(!names_match("Äpfel", "Apfel"));
    }

    #[test]
    fn remove_twice_is_a_noop_the_second_time() {
        let mut store = TaskStore::new();
        let id = store.add("A").expect("add");
        store.add("B").expect("add");

        let removed = store.remove(id).expect("first remove");
        assert_eq!(removed.name(), "A");
        assert!(store.remove(id).is_none());
        assert_eq!(names(&store), vec!["B"]);
    }

    #[test]
    fn removed_name_can_be_added_again() {
        let mut store = TaskStore::new();
        let id = store.add("A").expect("add");
        store.remove(id);
        assert!(store.add("a").is_ok());
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut store = TaskStore::new();
        let id = store.add("A").expect("add");
        assert_eq!(store.toggle(id), Some(true));
        assert_eq!(store.toggle(id), Some(false));
        assert_eq!(store.get(id).map(|t| t.is_completed()), Some(false));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = TaskStore::new();
        store.add("A").expect("add");
        let stranger = TaskId::new();
        assert!(store.toggle(stranger).is_none());
        assert!(store.remove(stranger).is_none());
        assert_eq!(store.len(), 1);
    }
}
