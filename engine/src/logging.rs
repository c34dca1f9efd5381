//! Logging setup
//!
//! Library code logs through the [`log`] facade. Binaries call [`init`] once
//! to install `env_logger`. The default level applies to our own crates and
//! can be overridden with `RUST_LOG`:
//!
//! ```sh
//! $> RUST_LOG=domino_trail_engine=trace cargo run --bin domino_sandbox
//! ```

use log::LevelFilter;

/// Crates whose output is enabled by default.
pub const LOG_TARGETS: &[&str] = &["domino_trail_engine", "domino_sandbox"];

/// Default level: `Info` in debug builds, `Warn` in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Filter string equivalent to `RUST_LOG` for `targets` at `level`.
pub fn filter_string(targets: &[&str], level: LevelFilter) -> String {
    let level = level.as_str().to_ascii_lowercase();
    targets
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install `env_logger`. `RUST_LOG`, when set, wins over `level`.
pub fn init(level: LevelFilter) {
    let filter = filter_string(LOG_TARGETS, level);
    let env = env_logger::Env::default().default_filter_or(filter);
    // A second init (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env).try_init();
}
