pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod render;
pub mod shell;
pub mod store;
pub mod task;

pub use error::AddError;
pub use filter::ViewKind;
pub use render::{
  Dialog,
  Screen
};
pub use shell::{
  Action,
  Outcome,
  Shell
};
pub use store::TaskStore;
pub use task::{
  Task,
  TaskId
};
