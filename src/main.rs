use clap::Parser;
use expense_tracker::args::{Args, Command};
use expense_tracker::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().home().path();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init => commands::init(home).await?.print(),

        Command::Add(add_args) => commands::add(Config::load(home).await?, add_args.clone())
            .await?
            .print(),

        Command::Update(update_args) => {
            commands::update(Config::load(home).await?, update_args.clone())
                .await?
                .print()
        }

        Command::Delete(delete_args) => {
            commands::delete(Config::load(home).await?, delete_args.clone())
                .await?
                .print()
        }

        Command::List(filter_args) => commands::list(Config::load(home).await?, filter_args.clone())
            .await?
            .print(),

        Command::Summary(summary_args) => {
            commands::summary(Config::load(home).await?, summary_args.clone())
                .await?
                .print()
        }

        Command::Export(export_args) => {
            commands::export(Config::load(home).await?, export_args.clone())
                .await?
                .print()
        }

        Command::Import(import_args) => {
            commands::import(Config::load(home).await?, import_args.clone())
                .await?
                .print()
        }

        Command::Clear => commands::clear(Config::load(home).await?).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only. The library
            // and the binary are separate crates as far as tracing targets go.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
