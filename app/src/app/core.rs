use std::io;
use std::sync::mpsc::Sender;

use super::settings::Settings;
use super::types::{OutletEvent, Outlets, StartOptions};
use crate::fs_op::path::{Platform, PathResolver};
use crate::runner::worker::DeferQueue;

/// One command object: working directory, flags, outlets and the deferred
/// queue its file operations run on.
pub struct App {
    pub resolver: PathResolver,
    pub settings: Settings,
    pub(crate) outlets: Outlets,
    pub(crate) queue: DeferQueue,
}

// submodules live in `src/app/core/`
mod navigation;

impl App {
    /// Create an `App` seeded from the default origin: the directory of the
    /// running executable.
    pub fn new(outlets: Sender<OutletEvent>) -> io::Result<Self> {
        let mut opts = StartOptions::default();
        opts.origin.app_dir = super::settings::app_dir().map(|p| p.to_string_lossy().into_owned());
        Self::with_options(&opts, outlets)
    }

    pub fn with_options(opts: &StartOptions, outlets: Sender<OutletEvent>) -> io::Result<Self> {
        let platform = opts.platform.unwrap_or_else(Platform::current);
        let resolver = PathResolver::with_platform(platform, opts.origin.clone());
        let queue = DeferQueue::spawn("fileCmd-defer")?;
        tracing::info!("new object: directory: {}", resolver.base_dir());
        Ok(App {
            resolver,
            settings: opts.settings,
            outlets: Outlets::new(outlets),
            queue,
        })
    }

    /// Block until every operation deferred so far has finished and reported.
    pub fn flush(&self) -> Result<(), crate::runner::worker::QueueClosed> {
        self.queue.flush()
    }

    pub fn set_verbose(&mut self, on: bool) {
        self.settings.verbose = on;
    }

    pub fn set_err_report(&mut self, on: bool) {
        self.settings.err_report = on;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        tracing::debug!("object freed: {}", self.resolver.base_dir());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn default_origin_is_executable_dir() {
        let (tx, _rx) = mpsc::channel();
        let app = App::new(tx).expect("new");
        let base = app.resolver.base_dir();
        assert!(base.ends_with('/'));
        assert!(app.resolver.is_absolute(base));
        assert_eq!(app.settings, Settings::default());
    }
}
