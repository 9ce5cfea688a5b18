//! GitHub Actions workflow commands.
//!
//! The runner scans stdout for lines shaped like `::error::message` and turns
//! them into step annotations. Data is escaped the same way the Actions
//! toolkit does it so multi-line messages survive.

use std::io::{self, Write};

/// Renders the `::error::` command for `message`.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Reports a failed step. The caller is responsible for exiting non-zero.
pub fn set_failed(message: &str) {
    let mut out = io::stdout().lock();
    // Nothing left to report to if stdout is gone.
    let _ = writeln!(out, "{}", error_command(message));
    let _ = out.flush();
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
