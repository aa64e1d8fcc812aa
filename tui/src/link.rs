//! Hand an external hotel link to the platform's opener.

use std::io;
use std::process::{Command, Stdio};

/// Program and leading arguments used to open a URL on this platform.
pub fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Spawn the opener for `link` without waiting for it. The link is passed
/// through untouched.
pub fn open(link: &str) -> io::Result<()> {
    let (program, args) = opener();
    tracing::info!(link, program, "opening external link");
    Command::new(program)
        .args(args)
        .arg(link)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
