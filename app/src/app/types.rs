use std::sync::mpsc::Sender;

use crate::app::settings::Settings;
use crate::fs_op::path::{Origin, Platform};

/// Traffic leaving an `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutletEvent {
    /// Outlet 0: current directory, in answer to `getdir`.
    Dir(String),
    /// Outlet 1: `true` on success, `false` on failure.
    Status(bool),
    /// Console post (verbose confirmations, `postdir`).
    Post(String),
    /// Console warning (unknown selectors, ignored `cd`).
    Warn(String),
    /// Console error (failed operations, bad arguments).
    Error(String),
}

/// Sending half of the outlets. Cheap to clone into deferred jobs.
#[derive(Debug, Clone)]
pub struct Outlets {
    tx: Sender<OutletEvent>,
}

impl Outlets {
    pub fn new(tx: Sender<OutletEvent>) -> Self {
        Self { tx }
    }

    pub fn emit(&self, event: OutletEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("outlet receiver gone, dropping {:?}", e.0);
        }
    }

    pub fn dir(&self, dir: impl Into<String>) {
        self.emit(OutletEvent::Dir(dir.into()));
    }

    pub fn status(&self, success: bool) {
        self.emit(OutletEvent::Status(success));
    }

    pub fn post(&self, msg: impl Into<String>) {
        self.emit(OutletEvent::Post(msg.into()));
    }

    pub fn warn(&self, msg: impl Into<String>) {
        self.emit(OutletEvent::Warn(msg.into()));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.emit(OutletEvent::Error(msg.into()));
    }
}

/// Construction options for `App`.
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    pub origin: Origin,
    pub settings: Settings,
    /// Defaults to the build target's platform.
    pub platform: Option<Platform>,
}
