//! Logging module
//!
//! Module-tagged logging macros. Every macro takes the module tag first,
//! which becomes the record target, e.g. `log_info!("blueprint", "...")`.
//! Records go through the `log` facade and are rendered by the
//! `tracing-subscriber` installed in [`init`].

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    /// `RUST_LOG` supplied the filter
    from_env: bool,
}

static CONTROL: OnceLock<LogControl> = OnceLock::new();

fn level_name(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` wins when set, otherwise `debug` in verbose mode and `info`
/// otherwise. Calling this more than once is a no-op.
pub fn init(verbose: bool) {
    if CONTROL.get().is_some() {
        return;
    }

    let (env_filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(level_name(verbose)), false),
    };
    let (filter, handle) = reload::Layer::new(env_filter);

    // try_init also bridges log records into tracing
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed {
        let _ = CONTROL.set(LogControl { handle, from_env });
    }
}

/// Change the log level after [`init`]
///
/// Used once settings are loaded, since they can turn on developer mode.
/// Returns false when nothing changed: logging is not initialized or
/// `RUST_LOG` owns the filter.
pub fn set_log_level(verbose: bool) -> bool {
    let Some(control) = CONTROL.get() else {
        return false;
    };
    if control.from_env {
        return false;
    }
    control
        .handle
        .modify(|filter| *filter = EnvFilter::new(level_name(verbose)))
        .is_ok()
}

#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)+) => {
        ::log::info!(target: $module, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)+) => {
        ::log::warn!(target: $module, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)+) => {
        ::log::error!(target: $module, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)+) => {
        ::log::debug!(target: $module, $($arg)+)
    };
}
