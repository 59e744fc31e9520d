use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::fs_op::error::FsOpError;

/// Build the platform shell invocation for `line`.
fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(line);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        cmd
    }
}

/// Re-quote one message argument for the shell.
///
/// Unquoted message tokens never contain whitespace, so only arguments that
/// were grouped with double quotes (or are empty) need quoting again. Bare
/// tokens pass through untouched and keep their shell meaning (`>`, `|`).
fn shell_quote(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && !arg.chars().any(char::is_whitespace) {
        return Cow::Borrowed(arg);
    }
    if cfg!(windows) {
        Cow::Owned(format!("\"{}\"", arg))
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}

/// Join message arguments into one shell line, keeping grouped arguments
/// together.
pub fn shell_line(args: &[String]) -> String {
    args.iter()
        .map(|a| shell_quote(a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Launch `args` through the platform shell inside `cwd` without waiting for
/// it to finish. A detached thread reaps the child so it does not linger as a
/// zombie.
pub fn spawn_command(args: &[String], cwd: &Path) -> Result<u32, FsOpError> {
    let line = shell_line(args);
    let child = shell_command(&line)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| {
            tracing::debug!("spawn `{}` in {} failed: {}", line, cwd.display(), e);
            FsOpError::from(e)
        })?;
    let pid = child.id();
    tracing::debug!(pid, "spawned `{}`", line);

    let mut child = child;
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::error!("failed to wait on child {}: {:#?}", pid, e);
        }
    });
    Ok(pid)
}
