use std::collections::HashMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  info,
  trace,
  warn
};

pub const DEFAULT_LOG_FILTER: &str =
  "info,tasklist_core=debug,\
   tasklist_gui_tauri=debug";

const RC_DIR: &str = "tasklist";
const RC_FILE: &str = "tasklistrc";

/// Window shell settings. The list
/// behaviour itself has no knobs.
#[derive(Debug, Clone)]
pub struct Config {
  map: HashMap<String, String>,
  pub loaded_files: Vec<PathBuf>
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct WindowConfig {
  pub title:  String,
  pub width:  u32,
  pub height: u32
}

impl Default for Config {
  fn default() -> Self {
    let mut map = HashMap::new();
    map.insert(
      "window.title".to_string(),
      "Todo List".to_string()
    );
    map.insert(
      "window.width".to_string(),
      "350".to_string()
    );
    map.insert(
      "window.height".to_string(),
      "600".to_string()
    );
    map.insert(
      "log.filter".to_string(),
      DEFAULT_LOG_FILTER.to_string()
    );

    Config {
      map,
      loaded_files: vec![]
    }
  }
}

impl Config {
  #[tracing::instrument(skip(
    rc_override
  ))]
  pub fn load(
    rc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Config::default();

    match resolve_rc_path(rc_override)
    {
      | Some(path) => {
        info!(rc = %path.display(), "loading tasklistrc");
        cfg.load_file(&path, &mut vec![])?;
      }
      | None => {
        debug!(
          "no tasklistrc found; using \
           defaults"
        );
      }
    }

    Ok(cfg)
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_u32(
    &self,
    key: &str
  ) -> anyhow::Result<Option<u32>> {
    self
      .map
      .get(key)
      .map(|v| {
        v.trim().parse::<u32>().with_context(
          || {
            format!(
              "invalid number for \
               {key}: {v}"
            )
          }
        )
      })
      .transpose()
  }

  pub fn log_filter(&self) -> String {
    self
      .get("log.filter")
      .unwrap_or_else(|| {
        DEFAULT_LOG_FILTER.to_string()
      })
  }

  pub fn window(
    &self
  ) -> anyhow::Result<WindowConfig> {
    let title = self
      .get("window.title")
      .unwrap_or_default();
    let width = self
      .get_u32("window.width")?
      .unwrap_or(350);
    let height = self
      .get_u32("window.height")?
      .unwrap_or(600);

    if width == 0 || height == 0 {
      return Err(anyhow!(
        "window size must be \
         positive, got \
         {width}x{height}"
      ));
    }

    Ok(WindowConfig {
      title,
      width,
      height
    })
  }

  /// `chain` holds the canonical paths
  /// of the files currently being read,
  /// outermost first.
  #[tracing::instrument(skip(
    self, chain
  ))]
  fn load_file(
    &mut self,
    path: &Path,
    chain: &mut Vec<PathBuf>
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    let canonical = fs::canonicalize(&path)
      .with_context(|| {
        format!(
          "failed to resolve {}",
          path.display()
        )
      })?;
    chain.push(canonical);

    self
      .loaded_files
      .push(path.clone());

    let base_dir = path
      .parent()
      .map(|p| p.to_path_buf())
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if let Some((before, _)) =
        line.split_once('#')
      {
        line = before.trim();
      }
      if line.is_empty() {
        continue;
      }

      if let Some(include_rest) =
        line.strip_prefix("include ")
      {
        let include_path =
          resolve_include_path(
            &base_dir,
            include_rest.trim()
          )?;
        debug!(
            file = %path.display(),
            include = %include_path.display(),
            line = line_num + 1,
            "processing include"
        );

        if include_path.exists() {
          let target =
            fs::canonicalize(&include_path)
              .with_context(|| {
                format!(
                  "failed to resolve {}",
                  include_path.display()
                )
              })?;
          if chain.contains(&target) {
            return Err(anyhow!(
              "include cycle at {}:{}: {}",
              path.display(),
              line_num + 1,
              include_path.display()
            ));
          }
          self.load_file(
            &include_path,
            chain
          )?;
        } else {
          warn!(include = %include_path.display(), "include file does not exist; skipping");
        }
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line \
             {}:{}: {}",
            path.display(),
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      trace!(key = %key, value = %value, "loaded config key");
      self.map.insert(key, value);
    }

    chain.pop();
    Ok(())
  }
}

fn resolve_rc_path(
  rc_override: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = rc_override {
    return Some(path.to_path_buf());
  }

  let candidate = dirs::config_dir()?
    .join(RC_DIR)
    .join(RC_FILE);
  candidate
    .exists()
    .then_some(candidate)
}

fn resolve_include_path(
  base_dir: &Path,
  include: &str
) -> anyhow::Result<PathBuf> {
  if include.trim().is_empty() {
    return Err(anyhow!(
      "include path cannot be empty"
    ));
  }

  let expanded =
    expand_tilde(Path::new(include));
  if expanded.is_absolute() {
    Ok(expanded)
  } else {
    Ok(base_dir.join(expanded))
  }
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}
