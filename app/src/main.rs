use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;

use fileCmd::app::settings::{self, Settings};
use fileCmd::app::{App, StartOptions};
use fileCmd::fs_op::Origin;
use fileCmd::runner::logging::init_logging;
use fileCmd::runner::{run_app, spawn_printer};

/// Run cd / rename / delete / command messages against a working directory.
///
/// Messages are read one per line from `--exec`, `--script`, or stdin.
#[derive(Parser, Debug)]
#[command(name = "fileCmd", version, about)]
struct Cli {
    /// Reference file; its directory is the starting directory and `cd ~` target.
    #[arg(long)]
    origin: Option<String>,

    /// Fallback starting directory (defaults to the executable's directory).
    #[arg(long)]
    app_dir: Option<String>,

    /// Post a confirmation after each successful rename/delete.
    #[arg(long)]
    verbose: bool,

    /// Post a diagnostic when an operation fails.
    #[arg(long)]
    err_report: bool,

    /// Read messages from this file instead of stdin.
    #[arg(long, conflicts_with = "exec")]
    script: Option<PathBuf>,

    /// Run this message (repeatable) instead of reading stdin.
    #[arg(short = 'e', long = "exec")]
    exec: Vec<String>,

    /// Settings file to load and save (defaults to the user config directory).
    #[arg(long)]
    settings_file: Option<PathBuf>,

    /// Persist the final `verbose` / `err_report` flags.
    #[arg(long)]
    save_settings: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging for fileCmd.
    #[arg(long)]
    debug: bool,
}

fn load(cli: &Cli) -> Settings {
    let res = match &cli.settings_file {
        Some(path) => settings::load_settings_from(path),
        None => settings::load_settings(),
    };
    res.unwrap_or_else(|e| {
        tracing::warn!("using default settings: {}", e);
        Settings::default()
    })
}

fn save(cli: &Cli, s: &Settings) -> anyhow::Result<()> {
    let path = match &cli.settings_file {
        Some(path) => {
            settings::save_settings_to(s, path)?;
            path.clone()
        }
        None => settings::save_settings(s)?,
    };
    tracing::info!("settings saved to {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_file.as_deref(), cli.debug)?;

    let mut flags = load(&cli);
    flags.verbose |= cli.verbose;
    flags.err_report |= cli.err_report;

    let app_dir = cli.app_dir.clone().or_else(|| {
        settings::app_dir().map(|p| p.to_string_lossy().into_owned())
    });
    let opts = StartOptions {
        origin: Origin::new(cli.origin.clone(), app_dir),
        settings: flags,
        ..Default::default()
    };

    let (tx, rx) = mpsc::channel();
    let printer = spawn_printer(rx);
    let mut app = App::with_options(&opts, tx).context("starting deferred queue")?;

    if !cli.exec.is_empty() {
        run_app(&mut app, Cursor::new(cli.exec.join("\n")))?;
    } else if let Some(script) = &cli.script {
        let file = File::open(script)
            .with_context(|| format!("opening script {}", script.display()))?;
        run_app(&mut app, BufReader::new(file))?;
    } else {
        run_app(&mut app, io::stdin().lock())?;
    }

    if cli.save_settings {
        save(&cli, &app.settings)?;
    }

    // Dropping the app drains the queue and releases the last outlet sender.
    drop(app);
    if printer.join().is_err() {
        tracing::error!("outlet printer panicked");
    }
    Ok(())
}
