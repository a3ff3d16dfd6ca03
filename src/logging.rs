//! Diagnostic channel setup. Everything the loader reports (unreadable files,
//! malformed rows, load totals) goes through `tracing`; this module decides
//! where it ends up. Output goes to stderr so it never interleaves with the
//! report printed on stdout.

use anyhow::{anyhow, Context as _, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Directive used when `RUST_LOG` is unset. `warn` keeps malformed-row
/// diagnostics visible without the per-load summary.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Fails instead of panicking if one is already
/// installed.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .context("failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        let _ = init();
        assert!(init().is_err());
    }
}
