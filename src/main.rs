//! # doggo
//!
//! Compile and run doggo programs, one file after another.
//!

use ansi_term::Style;
use clap::Parser;
use doggo::lang::{lex, Dialect, Error};
use doggo::mach::{compile, Event, Listing, Runtime};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compile and run doggo programs
#[derive(Parser, Debug)]
#[command(name = "doggo", version, about, long_about = None)]
struct Cli {
    /// Program files, run in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Keyword spelling: doggo or english
    #[arg(short, long, default_value_t = Dialect::Doggo, env = "DOGGO_DIALECT")]
    dialect: Dialect,

    /// Run the remaining files after one fails
    #[arg(short, long)]
    keep_going: bool,

    /// Print the compiled bytecode before running
    #[arg(short, long)]
    listing: bool,

    /// Log compiler and machine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DOGGO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %error, "unable to set Ctrl-C handler");
    }

    let mut failed = false;
    for path in &cli.files {
        if let Err(error) = run_file(path, &cli, &interrupted) {
            let message = format!("doggo: {}: {}", path.display(), error);
            eprintln!("{}", Style::new().bold().paint(message));
            failed = true;
            if !cli.keep_going {
                break;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_file(path: &Path, cli: &Cli, interrupted: &AtomicBool) -> Result<(), Error> {
    info!(path = %path.display(), dialect = %cli.dialect, "running");
    let source = fs::read_to_string(path)?;
    let program = compile(lex(&source), cli.dialect)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.listing {
        write!(out, "{}", Listing::new(&program))?;
    }
    let mut runtime = Runtime::new(program);
    let result = loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Print(val) => writeln!(out, "{}", val)?,
            Event::Running => {}
            Event::Stopped => break Ok(()),
            Event::Error(error) => break Err(error),
        }
    };
    // Program output goes out ahead of the error report on stderr.
    out.flush()?;
    result
}
