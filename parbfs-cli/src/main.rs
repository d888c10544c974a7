mod app;
mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use parbfs::traversal::CancellationToken;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    // First Ctrl+C stops the traversal at the next level boundary, a second one exits
    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        if handler_token.is_cancelled() {
            eprintln!("\nCancelled.");
            std::process::exit(130);
        }
        eprintln!("\nCancelling after the current level...");
        handler_token.cancel();
    })
    .context("failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    // Show parbfs info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("parbfs", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Run {
            path,
            root,
            threads,
            chunk,
            compare,
        } => commands::run::run(
            path,
            &commands::run::RunOptions {
                root: *root,
                threads: *threads,
                chunk: *chunk,
                compare: *compare,
                cancel,
            },
            &cli.global,
        ),
        Command::Show { path, format } => commands::show::run(path, *format, &cli.global),
        Command::Generate { kind, size, output } => {
            commands::generate::run(*kind, *size, output.as_deref(), &cli.global)
        }
    }
}
