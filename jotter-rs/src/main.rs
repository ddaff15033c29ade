//! Jotter CLI entry point.

use clap::Parser;
use jotter::cli::args::{Cli, Commands};
use jotter::cli::output::Output;
use jotter::cli::shell::{self, Shell};
use jotter::cli::{add, clear, delete, list, search};
use jotter::config::Config;
use jotter::error::{ExitCode as JotterExitCode, JotterError};
use jotter::store::NoteStore;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.output_format(), cli.quiet);

    match run(&cli, &output) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            if !output.is_quiet() {
                output.error(&e.to_string());
            }
            ExitCode::from(e.exit_kind().code() as u8)
        }
    }
}

fn run(cli: &Cli, output: &Output) -> Result<JotterExitCode, JotterError> {
    let config = Config::load()?;
    init_logging(cli, &config);

    let mut store = NoteStore::open(config.resolve_store_path(cli.file.as_deref()));
    store.load();

    match &cli.command {
        None | Some(Commands::Shell) => {
            install_interrupt_handler()?;
            let stdin = io::stdin();
            Shell::new(&mut store, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Add(args)) => add::run(&mut store, args, output)?,
        Some(Commands::List) => list::run(&store, output)?,
        Some(Commands::Delete(args)) => delete::run(&mut store, args, output)?,
        Some(Commands::Search(args)) => search::run(&store, args, output)?,
        Some(Commands::Clear(args)) => clear::run(&mut store, args, output)?,
        Some(Commands::Count) => list::count(&store, output)?,
    }

    Ok(JotterExitCode::Success)
}

/// `-v` flags beat the config file; `RUST_LOG` beats both.
fn init_logging(cli: &Cli, config: &Config) {
    let level = cli.verbosity_level().unwrap_or(config.log.level.as_str());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Ctrl-C anywhere in the menu leaves with a farewell and a success status.
///
/// This includes action prompts: a blocking stdin read cannot be cancelled
/// from the handler, so an interrupt never returns to the menu. See
/// "Interrupts" in DESIGN.md.
fn install_interrupt_handler() -> Result<(), JotterError> {
    ctrlc::set_handler(|| {
        println!("\n\n{}\n", shell::FAREWELL);
        std::process::exit(0);
    })
    .map_err(|e| JotterError::Other(format!("Failed to install Ctrl-C handler: {}", e)))
}
