//! ui::logging
//!
//! Diagnostic logging via `tracing`.
//!
//! The library emits `tracing` events and never installs a subscriber. The
//! CLI calls [`init`] once at startup: `--debug` enables DEBUG, otherwise
//! only warnings are shown. `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;

use super::output::Verbosity;

/// Default filter directive for a verbosity level.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Debug => "glyphwave=debug",
        Verbosity::Normal => "warn",
        Verbosity::Quiet => "error",
    }
}

/// Install the stderr subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_enables_crate_debug() {
        assert_eq!(default_directive(Verbosity::Debug), "glyphwave=debug");
        assert_eq!(default_directive(Verbosity::Normal), "warn");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
    }
}
