use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

pub const STARTUP_FAILURE_TITLE: &str =
  "Oops!";
pub const STARTUP_FAILURE_MESSAGE:
  &str =
  "Error! Connect with IT department.";

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum TaskView {
  #[default]
  All,
  Done,
  Undone
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskRowDto {
  pub id:             Uuid,
  pub name:           String,
  pub completed:      bool,
  pub strike_through: bool,
  pub delete_label:   String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ViewTabDto {
  pub view:   TaskView,
  pub label:  String,
  pub active: bool,
  pub count:  usize
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ScreenDto {
  /// Backend dispatch count this screen
  /// was rendered at.
  #[serde(default)]
  pub revision:     u64,
  pub placeholder:  String,
  pub submit_label: String,
  pub tabs:         Vec<ViewTabDto>,
  pub active:       TaskView,
  pub rows:         Vec<TaskRowDto>
}

impl ScreenDto {
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Results can arrive out of order;
  /// a screen older than the one shown
  /// must not replace it.
  pub fn is_older_than(
    &self,
    shown_revision: u64
  ) -> bool {
    self.revision < shown_revision
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DialogDto {
  pub title:             String,
  pub message:           String,
  pub acknowledge_label: String
}

impl DialogDto {
  pub fn startup_failure() -> Self {
    Self {
      title:             STARTUP_FAILURE_TITLE
        .to_string(),
      message:
        STARTUP_FAILURE_MESSAGE
          .to_string(),
      acknowledge_label: "OK"
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ActionResultDto {
  pub screen:      ScreenDto,
  #[serde(default)]
  pub dialog:      Option<DialogDto>,
  #[serde(default)]
  pub clear_input: bool
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TaskAddArgs {
  pub name: String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TaskIdArg {
  pub id: Uuid
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct ViewSelectArgs {
  pub view: TaskView
}

#[cfg(test)]
mod tests {
  use super::{
    ActionResultDto,
    DialogDto,
    ScreenDto,
    TaskView,
    ViewSelectArgs
  };

  fn screen_at(
    revision: u64
  ) -> ScreenDto {
    ScreenDto {
      revision,
      placeholder: String::new(),
      submit_label: "Add Task"
        .to_string(),
      tabs: vec![],
      active: TaskView::All,
      rows: vec![]
    }
  }

  #[test]
  fn late_results_are_older_than_the_shown_screen()
   {
    assert!(screen_at(3).is_older_than(4));
    assert!(!screen_at(4).is_older_than(4));
    assert!(!screen_at(5).is_older_than(4));
  }

  #[test]
  fn view_select_wire_format() {
    let json = serde_json::to_string(
      &ViewSelectArgs {
        view: TaskView::Undone
      }
    )
    .expect("serialize");
    assert_eq!(
      json,
      r#"{"view":"Undone"}"#
    );
  }

  #[test]
  fn action_result_tolerates_missing_optionals()
   {
    let json = r#"{"screen":{"placeholder":"","submit_label":"Add Task","tabs":[],"active":"All","rows":[]}}"#;
    let parsed: ActionResultDto =
      serde_json::from_str(json)
        .expect("deserialize");
    assert!(parsed.dialog.is_none());
    assert!(!parsed.clear_input);
    assert!(parsed.screen.is_empty());
    assert_eq!(parsed.screen.revision, 0);
  }

  #[test]
  fn startup_failure_dialog_is_generic()
  {
    let dialog =
      DialogDto::startup_failure();
    assert_eq!(
      dialog.message,
      "Error! Connect with IT \
       department."
    );
  }
}
