//! Startup banner and session summary display.

use crate::consts::{AUTHOR, HOMEPAGE, REPO};
use crate::engine::Direction;

/// Session configuration for display in the startup banner.
pub struct BannerInfo {
    pub direction: Direction,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             T H E R M O               ║
   ║    fahrenheit <-> celsius, live       ║
   ╚═══════════════════════════════════════╝

   version    {}
   by         {}
   home       {}
   repo       {}
   direction  {}

   type a temperature, /toggle to switch, /help for more
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.direction,
    );
}

/// Session summary line. `None` when nothing was converted.
pub fn session_summary(updates: u64) -> Option<String> {
    match updates {
        0 => None,
        1 => Some("session: 1 update".to_string()),
        n => Some(format!("session: {n} updates")),
    }
}

/// Print the session summary (update count + farewell).
pub fn print_session_summary(updates: u64) {
    if let Some(line) = session_summary(updates) {
        println!("{line}");
    }
    println!("goodbye.");
}
