pub mod app;
pub mod errors;
pub mod fs_op;
pub mod input;
pub mod runner;

pub use crate::app::{App, OutletEvent, StartOptions};
pub use crate::errors::CommandError;
pub use crate::fs_op::{FsOpError, OperationResult, PathResolver};
