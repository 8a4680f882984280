//! Opens a saved image in the platform's default viewer without waiting

use std::path::Path;
use std::process::{Command, Stdio};

/// Build the viewer command for the current platform
pub fn viewer_command(path: &Path) -> Command {
    let mut command = if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    command
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Spawn the viewer for `path` and return immediately
///
/// The child is never waited on. Returns `false` if the viewer could not be
/// launched; the failure is reported on stderr and otherwise ignored.
// Allow print for user feedback when no viewer is available
#[allow(clippy::print_stderr)]
pub fn open_preview(path: &Path) -> bool {
    match viewer_command(path).spawn() {
        Ok(_child) => true,
        Err(e) => {
            eprintln!("Could not open preview for {}: {e}", path.display());
            false
        }
    }
}
