use std::io;
use thiserror::Error;

/// Closed taxonomy of filesystem failures reported by rename/delete/spawn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOpError {
    /// Source, destination folder, or program not found.
    #[error("file or destination folder not found")]
    NotFound,

    /// Destination already exists and the platform refused to replace it.
    #[error("a file with that name already exists")]
    AlreadyExists,

    /// Permission denied, or the file is open / read-only.
    #[error("access denied")]
    AccessDenied,

    /// The path contains characters the platform does not accept.
    #[error("invalid characters in path")]
    InvalidName,

    /// Anything else; carries the raw OS error code (`-1` when unavailable).
    #[error("unknown error: {0}")]
    Unknown(i32),
}

impl FsOpError {
    /// Classify an I/O error.
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => return FsOpError::NotFound,
            io::ErrorKind::AlreadyExists => return FsOpError::AlreadyExists,
            io::ErrorKind::PermissionDenied => return FsOpError::AccessDenied,
            io::ErrorKind::InvalidInput if err.raw_os_error().is_none() => {
                // std rejects interior NUL bytes before reaching the OS.
                return FsOpError::InvalidName;
            }
            _ => {}
        }
        match err.raw_os_error() {
            Some(code) if is_invalid_name_code(code) => FsOpError::InvalidName,
            Some(code) => FsOpError::Unknown(code),
            None => FsOpError::Unknown(-1),
        }
    }

    /// Classify a failed removal. Delete only distinguishes `AccessDenied`
    /// and `NotFound`; everything else collapses to `Unknown`.
    pub fn classify_removal(err: &io::Error) -> Self {
        match FsOpError::classify(err) {
            e @ (FsOpError::NotFound | FsOpError::AccessDenied | FsOpError::Unknown(_)) => e,
            FsOpError::AlreadyExists | FsOpError::InvalidName => {
                FsOpError::Unknown(err.raw_os_error().unwrap_or(-1))
            }
        }
    }
}

#[cfg(unix)]
fn is_invalid_name_code(code: i32) -> bool {
    code == libc::EINVAL
}

#[cfg(windows)]
fn is_invalid_name_code(code: i32) -> bool {
    // ERROR_INVALID_NAME
    code == 123
}

#[cfg(not(any(unix, windows)))]
fn is_invalid_name_code(_code: i32) -> bool {
    false
}

impl From<io::Error> for FsOpError {
    fn from(e: io::Error) -> Self {
        FsOpError::classify(&e)
    }
}
