use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{
  EnvFilter,
  fmt
};

/// Installs the global subscriber.
/// `RUST_LOG` wins over
/// `default_filter`; an invalid
/// default falls back to `info`.
pub fn init_tracing(
  default_filter: &str
) {
  let filter =
    EnvFilter::try_from_default_env()
      .or_else(|_| {
        EnvFilter::try_new(
          default_filter
        )
      })
      .unwrap_or_else(|_| {
        EnvFilter::new("info")
      });

  let init_result =
    tracing_subscriber::registry()
      .with(filter)
      .with(
        fmt::layer()
          .with_target(true)
          .with_line_number(true)
      )
      .try_init();

  if let Err(err) = init_result {
    debug!(error = %err, "tracing subscriber already set, continuing");
  }
}

#[cfg(test)]
mod tests {
  use super::init_tracing;

  #[test]
  fn second_init_is_tolerated() {
    init_tracing("debug");
    init_tracing("not a [valid filter");
  }
}
