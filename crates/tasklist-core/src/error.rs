//! Errors surfaced by task-list mutations.
//!
//! Only `add` can be rejected. Toggle and delete on an unknown id are
//! no-ops, not errors. Startup and toolkit failures are `anyhow::Error`
//! at the binary boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a task name was not added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// Input was empty after trimming. Callers ignore this silently.
    EmptyInput,
    /// A task with the same name, ignoring case, already exists.
    DuplicateTask { name: String },
}

impl AddError {
    /// Whether the rejection should be shown to the user.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::DuplicateTask { .. })
    }
}

impl Display for AddError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "task name is empty"),
            Self::DuplicateTask { name } => write!(f, "task is duplicated: `{name}`"),
        }
    }
}

impl Error for AddError {}

#[cfg(test)]
mod tests {
    use super::AddError;

    #[test]
    fn only_duplicates_are_user_visible() {
        assert!(!AddError::EmptyInput.is_user_visible());
        assert!(
            AddError::DuplicateTask {
                name: "a".to_string()
            }
            .is_user_visible()
        );
    }

    #[test]
    fn display_names_the_duplicate() {
        let err = AddError::DuplicateTask {
            name: "Buy milk".to_string(),
        };
        assert_eq!(err.to_string(), "task is duplicated: `Buy milk`");
    }
}
