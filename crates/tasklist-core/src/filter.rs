use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

use crate::store::TaskStore;
use crate::task::Task;

/// One of the three views over the
/// store. Also the tab identity.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
  #[default]
  All,
  Done,
  Undone
}

impl ViewKind {
  /// Tab order.
  pub const ALL: [ViewKind; 3] = [
    ViewKind::All,
    ViewKind::Done,
    ViewKind::Undone
  ];

  pub fn label(self) -> &'static str {
    match self {
      | ViewKind::All => "All",
      | ViewKind::Done => "Done",
      | ViewKind::Undone => "Undone"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | ViewKind::All => true,
      | ViewKind::Done => {
        task.is_completed()
      }
      | ViewKind::Undone => {
        !task.is_completed()
      }
    }
  }
}

impl fmt::Display for ViewKind {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for ViewKind {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "all" => Ok(ViewKind::All),
      | "done" => Ok(ViewKind::Done),
      | "undone" => {
        Ok(ViewKind::Undone)
      }
      | other => Err(anyhow!(
        "unknown view: {other}"
      ))
    }
  }
}

/// Tasks of `store` visible in
/// `kind`, in store order. Recomputed
/// on every call.
#[tracing::instrument(skip(store))]
pub fn filter(
  store: &TaskStore,
  kind: ViewKind
) -> Vec<&Task> {
  let out: Vec<&Task> = store
    .iter()
    .filter(|task| kind.matches(task))
    .collect();
  trace!(
    total = store.len(),
    visible = out.len(),
    "filtered view"
  );
  out
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct ViewCounts {
  pub all:    usize,
  pub done:   usize,
  pub undone: usize
}

impl ViewCounts {
  pub fn get(
    &self,
    kind: ViewKind
  ) -> usize {
    match kind {
      | ViewKind::All => self.all,
      | ViewKind::Done => self.done,
      | ViewKind::Undone => self.undone
    }
  }
}

pub fn counts(
  store: &TaskStore
) -> ViewCounts {
  let done = store
    .iter()
    .filter(|task| task.is_completed())
    .count();
  ViewCounts {
    all: store.len(),
    done,
    undone: store.len() - done
  }
}

#[cfg(test)]
mod tests {
  use super::{
    ViewKind,
    counts,
    filter
  };
  use crate::store::TaskStore;

  fn names(
    store: &TaskStore,
    kind: ViewKind
  ) -> Vec<String> {
    filter(store, kind)
      .into_iter()
      .map(|t| t.name().to_string())
      .collect()
  }

  #[test]
  fn views_partition_the_store() {
    let mut store = TaskStore::new();
    let a = store.add("a").unwrap();
    store.add("b").unwrap();
    let c = store.add("c").unwrap();
    store.add("d").unwrap();
    store.toggle(a);
    store.toggle(c);

    let all = names(&store, ViewKind::All);
    let done =
      names(&store, ViewKind::Done);
    let undone =
      names(&store, ViewKind::Undone);

    assert_eq!(all, vec!["d", "c", "b", "a"]);
    assert_eq!(done, vec!["c", "a"]);
    assert_eq!(undone, vec!["d", "b"]);

    for task in store.iter() {
      let in_done = done
        .iter()
        .any(|n| n == task.name());
      let in_undone = undone
        .iter()
        .any(|n| n == task.name());
      assert!(in_done ^ in_undone);
    }
    assert_eq!(
      done.len() + undone.len(),
      all.len()
    );
  }

  #[test]
  fn views_return_references_into_the_store()
   {
    let mut store = TaskStore::new();
    let id = store.add("a").unwrap();
    let view =
      filter(&store, ViewKind::All);
    let stored = store.get(id).unwrap();
    assert!(std::ptr::eq(
      view[0], stored
    ));
  }

  #[test]
  fn empty_store_yields_empty_views() {
    let store = TaskStore::new();
    for kind in ViewKind::ALL {
      assert!(
        filter(&store, kind).is_empty()
      );
    }
  }

  #[test]
  fn counts_track_completion() {
    let mut store = TaskStore::new();
    let a = store.add("a").unwrap();
    store.add("b").unwrap();
    store.toggle(a);

    let counts = counts(&store);
    assert_eq!(counts.all, 2);
    assert_eq!(counts.get(ViewKind::Done), 1);
    assert_eq!(
      counts.get(ViewKind::Undone),
      1
    );
  }

  #[test]
  fn view_kind_parses_labels() {
    assert_eq!(
      "Done".parse::<ViewKind>().unwrap(),
      ViewKind::Done
    );
    assert_eq!(
      " undone ".parse::<ViewKind>().unwrap(),
      ViewKind::Undone
    );
    assert!(
      "pending"
        .parse::<ViewKind>()
        .is_err()
    );
    assert_eq!(
      ViewKind::default(),
      ViewKind::All
    );
  }
}
