//! Message loop, dispatch, and the deferred worker.

pub mod commands;
pub mod event_loop_main;
pub mod logging;
pub mod shell;
pub mod worker;

pub use commands::{dispatch, execute_command, Verb};
pub use event_loop_main::{run_app, spawn_printer};
