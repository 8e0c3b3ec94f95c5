//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Fallback env var for the log filter when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "THERMO_LOGLEVEL";

/// Log filter when neither `RUST_LOG` nor [`LOG_ENV`] is set.
pub const DEFAULT_LOG_FILTER: &str = "thermo=warn";

/// REPL prompt for the given toggle label.
pub fn prompt(label: &str) -> String {
    format!("[{label}]> ")
}
