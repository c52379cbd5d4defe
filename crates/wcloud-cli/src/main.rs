#![forbid(unsafe_code)]

//! `wcloud` binary entry point.

use std::io;
use std::process;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use wcloud_cli::cli::{HELP_TEXT, VERSION};
use wcloud_cli::{Command, Opts};

fn init_tracing(trace_ops: bool) {
    let default = if trace_ops { "warn,wcloud_cli=info" } else { "warn" };
    let filter = EnvFilter::try_from_env("WCLOUD_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let opts = match Opts::parse() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{HELP_TEXT}");
            return;
        }
        Ok(Command::Version) => {
            println!("wcloud {VERSION}");
            return;
        }
        Err(e) => {
            eprintln!("wcloud: {e}");
            eprintln!("Run with --help for usage information.");
            process::exit(1);
        }
    };

    init_tracing(opts.trace_ops);

    let stdin = io::stdin();
    if let Err(e) = wcloud_cli::run(&opts, stdin.lock(), io::stdout().lock()) {
        tracing::error!(error = %e, "run failed");
        eprintln!("wcloud: {e}");
        process::exit(1);
    }
}
