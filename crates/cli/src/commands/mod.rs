//! Command implementations.
//!
//! Each command renders into lines of text first and then logs them, so the
//! rendering can be tested without capturing log output.

pub mod extras;
pub mod link;
pub mod passes;

/// Log each rendered line at `info`.
fn emit(lines: &[String]) {
    for line in lines {
        tracing::info!("{line}");
    }
}
