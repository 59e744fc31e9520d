use thiserror::Error;

use crate::runner::worker::QueueClosed;

/// Caller-side failures: the message was rejected before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer arguments than the selector needs.
    #[error("{selector}:  Expected {expected} argument(s), got {got}")]
    MissingArguments {
        selector: String,
        expected: usize,
        got: usize,
    },

    /// More arguments than the selector takes.
    #[error("{selector}:  Expected {expected} argument(s), got {got}")]
    TooManyArguments {
        selector: String,
        expected: usize,
        got: usize,
    },

    /// A flag selector got something other than an on/off value.
    #[error("{selector}:  Expected 0 or 1, got \"{value}\"")]
    InvalidFlag { selector: String, value: String },

    /// The deferred queue has shut down.
    #[error(transparent)]
    QueueClosed(#[from] QueueClosed),
}
