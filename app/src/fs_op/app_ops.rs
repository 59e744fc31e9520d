//! Deferred filesystem operations implemented on `App`.
//!
//! Fragments are resolved against the current directory when the command is
//! received, then the syscall runs on the `App`'s deferred queue. Each job
//! reports a status on outlet 1 and, depending on the `verbose` and
//! `err_report` flags captured at submission, a console message.

use std::path::PathBuf;

use crate::app::settings::Settings;
use crate::app::types::Outlets;
use crate::fs_op::error::FsOpError;
use crate::fs_op::mv::rename_resolved;
use crate::fs_op::outcome::OperationResult;
use crate::fs_op::remove::remove_resolved;
use crate::runner::shell::{shell_line, spawn_command};
use crate::runner::worker::QueueClosed;

/// Console text for a failed rename, keyed on the caller's own fragments.
pub fn rename_diagnostic(err: FsOpError, src: &str, dst: &str) -> String {
    match err {
        FsOpError::NotFound => format!(
            "rename:  File or destination folder not found:  \"{}\"  \"{}\"",
            src, dst
        ),
        FsOpError::AlreadyExists => format!("rename:  Existing file with name:  \"{}\"", dst),
        FsOpError::AccessDenied => format!("rename:  Access error:  \"{}\"", dst),
        FsOpError::InvalidName => {
            format!("rename:  Invalid characters:  \"{}\"  \"{}\"", src, dst)
        }
        FsOpError::Unknown(code) => format!("rename:  Unknown error:  {}", code),
    }
}

/// Console text for a failed delete.
pub fn delete_diagnostic(err: FsOpError, target: &str) -> String {
    match err {
        FsOpError::AccessDenied => format!("delete:  File is open or read-only:  \"{}\"", target),
        FsOpError::NotFound => format!("delete:  File not found:  \"{}\"", target),
        FsOpError::Unknown(code) => format!("delete:  Unknown error:  {}", code),
        other => format!("delete:  {}:  \"{}\"", other, target),
    }
}

/// Console text for a failed shell launch.
pub fn command_diagnostic(err: FsOpError, line: &str) -> String {
    match err {
        FsOpError::Unknown(code) => format!("command:  Unknown error:  {}", code),
        other => format!("command:  {}:  \"{}\"", other, line),
    }
}

fn report(
    outlets: &Outlets,
    flags: Settings,
    result: OperationResult,
    ok_msg: String,
    fail_msg: impl FnOnce(FsOpError) -> String,
) {
    match result.error {
        None => {
            if flags.verbose {
                outlets.post(ok_msg);
            }
        }
        Some(err) => {
            tracing::debug!("deferred operation failed: {}", err);
            if flags.err_report {
                outlets.error(fail_msg(err));
            }
        }
    }
    outlets.status(result.success);
}

impl crate::app::core::App {
    /// Queue a rename of `src` to `dst`.
    ///
    /// Existing destination files are replaced silently on platforms where
    /// `std::fs::rename` does so; see [`crate::fs_op::mv::rename_resolved`].
    pub fn rename_deferred(&self, src: &str, dst: &str) -> Result<(), QueueClosed> {
        let from = PathBuf::from(self.resolver.resolve(src));
        let to = PathBuf::from(self.resolver.resolve(dst));
        let (src, dst) = (src.to_string(), dst.to_string());
        let outlets = self.outlets.clone();
        let flags = self.settings;
        tracing::debug!("queueing rename {} -> {}", from.display(), to.display());
        self.queue.defer(move || {
            let result = OperationResult::from(rename_resolved(&from, &to));
            report(
                &outlets,
                flags,
                result,
                format!("Renaming:  {}  to  {}", src, dst),
                |e| rename_diagnostic(e, &src, &dst),
            );
        })
    }

    /// Queue the removal of a file or empty directory.
    pub fn delete_deferred(&self, target: &str) -> Result<(), QueueClosed> {
        let path = PathBuf::from(self.resolver.resolve(target));
        let target = target.to_string();
        let outlets = self.outlets.clone();
        let flags = self.settings;
        tracing::debug!("queueing delete {}", path.display());
        self.queue.defer(move || {
            let result = OperationResult::from(remove_resolved(&path));
            report(
                &outlets,
                flags,
                result,
                format!("Removing:  {}", target),
                |e| delete_diagnostic(e, &target),
            );
        })
    }

    /// Queue a shell launch of `args` in the current directory. The job
    /// reports once the process has started; it does not wait for it.
    pub fn command_deferred(&self, args: &[String]) -> Result<(), QueueClosed> {
        let cwd = PathBuf::from(self.resolver.native_base_dir());
        let args = args.to_vec();
        let outlets = self.outlets.clone();
        let flags = self.settings;
        self.queue.defer(move || {
            let line = shell_line(&args);
            let result = OperationResult::from(spawn_command(&args, &cwd).map(|_| ()));
            report(
                &outlets,
                flags,
                result,
                format!("Launching:  {}", line),
                |e| command_diagnostic(e, &line),
            );
        })
    }
}
