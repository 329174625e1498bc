#![deny(missing_docs)]
//! Shared logging utilities for the Tana Paste workspace.
//!
//! Every crate logs through the `clip_*` macros so the facade can be swapped
//! in one place. The binary owns logger setup; tests call
//! [`initialize_for_tests`].

/// Target used by the clip pipeline when a call site wants to be filtered
/// independently of the crate it lives in.
pub const CLIP_TARGET: &str = "tana_paste";

/// `log::trace!` with the [`CLIP_TARGET`] target.
#[macro_export]
macro_rules! clip_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::CLIP_TARGET, $($arg)*);
    }};
}

/// `log::debug!` with the [`CLIP_TARGET`] target.
#[macro_export]
macro_rules! clip_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::CLIP_TARGET, $($arg)*);
    }};
}

/// `log::info!` with the [`CLIP_TARGET`] target.
#[macro_export]
macro_rules! clip_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::CLIP_TARGET, $($arg)*);
    }};
}

/// `log::warn!` with the [`CLIP_TARGET`] target.
#[macro_export]
macro_rules! clip_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::CLIP_TARGET, $($arg)*);
    }};
}

/// `log::error!` with the [`CLIP_TARGET`] target.
#[macro_export]
macro_rules! clip_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::CLIP_TARGET, $($arg)*);
    }};
}

/// Level used by [`initialize_for_tests`]: debug in debug builds, info otherwise.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a terminal logger for unit and integration tests.
///
/// Safe to call from every test: a second initialization is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
