//! Path resolution and the filesystem operations built on it.

pub mod app_ops;
pub mod error;
pub mod mv;
pub mod outcome;
pub mod path;
pub mod remove;

pub use error::FsOpError;
pub use mv::rename_file;
pub use outcome::OperationResult;
pub use path::{Navigation, Origin, PathResolver, PathStyle, Platform};
pub use remove::delete_file;
