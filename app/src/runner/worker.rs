//! Deferred execution of filesystem-mutating work.
//!
//! Every job runs on one dedicated thread, in submission order, and never on
//! the caller's stack. Callers that need to observe completion use
//! [`DeferQueue::flush`].

use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use thiserror::Error;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// The worker thread is gone; the job was not queued.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("deferred queue is closed")]
pub struct QueueClosed;

/// Single-worker FIFO queue.
pub struct DeferQueue {
    tx: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl DeferQueue {
    /// Spawn the worker thread.
    pub fn spawn(name: &str) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        let handle = std::thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                // Ends once every sender is dropped and the backlog is drained.
                while let Ok(job) = rx.recv() {
                    job();
                }
                tracing::debug!("deferred queue drained, worker exiting");
            })?;
        Ok(Self { tx: Some(tx), handle: Some(handle) })
    }

    /// Queue `job` behind everything already submitted.
    pub fn defer<F>(&self, job: F) -> Result<(), QueueClosed>
    where
        F: FnOnce() + Send + 'static,
    {
        let tx = self.tx.as_ref().ok_or(QueueClosed)?;
        tx.send(Box::new(job)).map_err(|_| QueueClosed)
    }

    /// Block until every job queued before this call has run.
    pub fn flush(&self) -> Result<(), QueueClosed> {
        let (done_tx, done_rx) = mpsc::sync_channel::<()>(1);
        self.defer(move || {
            let _ = done_tx.send(());
        })?;
        done_rx.recv().map_err(|_| QueueClosed)
    }
}

impl Drop for DeferQueue {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("deferred queue worker panicked");
            }
        }
    }
}
