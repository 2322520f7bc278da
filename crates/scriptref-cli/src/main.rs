//! scriptref CLI - cross-reference maps for Unity ScriptReference docs
//!
//! This is the main entry point for the scriptref command-line
//! interface. Command implementations live in separate modules under
//! `commands`.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    execute_command(cli).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            versions,
            metadata_root,
            output_dir,
            base_url,
            concurrency,
            offline,
        } => {
            commands::generate::execute(
                &versions,
                &metadata_root,
                &output_dir,
                base_url,
                concurrency,
                offline,
            )
            .await
        },

        Commands::Resolve {
            uid,
            comment_id,
            docs_version,
            base_url,
            json,
        } => commands::resolve::execute(&uid, comment_id, &docs_version, base_url, json).await,
    }
}
