use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

use anyhow::Context;

use crate::app::{App, OutletEvent};
use crate::runner::commands::execute_command;

/// Write one outlet event. Outlet traffic goes to `out`, console messages
/// to `console`.
pub fn render_event<W: Write, E: Write>(
    event: &OutletEvent,
    out: &mut W,
    console: &mut E,
) -> std::io::Result<()> {
    match event {
        OutletEvent::Dir(dir) => writeln!(out, "dir {}", dir),
        OutletEvent::Status(ok) => writeln!(out, "{}", u8::from(*ok)),
        OutletEvent::Post(msg) => writeln!(console, "{}", msg),
        OutletEvent::Warn(msg) => writeln!(console, "warning: {}", msg),
        OutletEvent::Error(msg) => writeln!(console, "error: {}", msg),
    }
}

/// Print outlet events on a dedicated thread until every sender is gone.
pub fn spawn_printer(rx: Receiver<OutletEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        for event in rx {
            let mut out = stdout.lock();
            let mut console = stderr.lock();
            if let Err(e) = render_event(&event, &mut out, &mut console).and_then(|_| out.flush()) {
                tracing::error!("failed to print outlet event: {:#?}", e);
                break;
            }
        }
    })
}

/// Feed every line of `input` to `app`, then wait for deferred work to
/// finish. Usage errors are reported on the console and do not stop the run.
pub fn run_app<R: BufRead>(app: &mut App, input: R) -> anyhow::Result<()> {
    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading input line {}", idx + 1))?;
        if let Err(e) = execute_command(app, &line) {
            tracing::warn!(line = idx + 1, "rejected: {}", e);
            app.outlets.error(e.to_string());
        }
    }
    app.flush().context("waiting for deferred operations")?;
    Ok(())
}
