mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phonebook_core::DATABASE_URL_VAR;
use phonebook_core::env_config::env_non_empty;
use phonebook_storage::StorageBackend;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Phonebook REST API server and record tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen port (defaults to $PORT, then 3001)
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Directory of static front-end files (defaults to $PHONEBOOK_STATIC_DIR)
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Keep records in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
    /// Print every record in the phonebook
    List,
    /// Add a record to the phonebook
    Add { name: String, number: String },
}

pub(crate) fn get_database_url() -> Result<String> {
    env_non_empty(DATABASE_URL_VAR).ok_or_else(|| {
        anyhow::anyhow!("{DATABASE_URL_VAR} environment variable must be set")
    })
}

pub(crate) async fn open_storage(in_memory: bool) -> Result<Arc<StorageBackend>> {
    let storage = if in_memory {
        StorageBackend::new_memory()
    } else {
        StorageBackend::new_postgres(&get_database_url()?).await?
    };
    tracing::info!(backend = storage.kind(), "storage ready");
    Ok(Arc::new(storage))
}

/// `RUST_LOG` directives, or `info` when unset or unparsable.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, static_dir, in_memory } => {
            commands::serve::run(port, host, static_dir, in_memory).await?;
        },
        Commands::List => commands::records::run_list().await?,
        Commands::Add { name, number } => commands::records::run_add(name, number).await?,
    }

    Ok(())
}
