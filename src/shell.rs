//! Process launching.
//!
//! Two thin wrappers: `run` blocks and captures output, `launch` detaches
//! into its own console window where the platform has one.

use std::io;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

/// Run a command to completion, capturing stdout and stderr.
pub fn run(program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<Output> {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    command.output()
}

/// Spawn a command detached from the dialog's console.
///
/// On Windows the child gets its own console window so it cannot scribble
/// over the dialog's screen.
pub fn launch(program: &str, args: &[&str]) -> io::Result<Child> {
    let mut command = Command::new(program);
    command.args(args);
    command.stdout(Stdio::piped()).stderr(Stdio::piped());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        use windows_sys::Win32::System::Threading::CREATE_NEW_CONSOLE;
        command.creation_flags(CREATE_NEW_CONSOLE);
    }

    command.spawn()
}
