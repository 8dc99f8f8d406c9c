// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::IsTerminal;

use clap::Parser;
use hdrs::{Cli, OutputFormat};

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let directive = hdrs::env::log_filter().unwrap_or_else(|| hdrs::env::DEFAULT_LOG_FILTER.into());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(hdrs::env::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to directory '{}': {}", dir, e);
            std::process::exit(hdrs::error::EXIT_FAILURE);
        }
    }

    let output = cli.command.output();
    if let Err(e) = hdrs::run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        if output == OutputFormat::Json {
            eprintln!("{}", e.to_json());
        } else {
            eprintln!("error: {}", e.report());
        }
        std::process::exit(e.exit_code());
    }
}
