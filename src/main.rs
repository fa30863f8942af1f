//! CLI entry point for espira

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "espira")]
#[command(version = "0.1.0")]
#[command(about = "A server-rendered blog front-end for a PocketBase backend", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts held by the backend
    List {
        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,

        /// Posts per page
        #[arg(long, default_value = "10")]
        per_page: u32,

        /// Sort field, `-` prefix for descending
        #[arg(long, default_value = "-created", allow_hyphen_values = true)]
        sort: espira::query::Sort,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "espira=debug,info"
    } else {
        "espira=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            espira::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Serve { port, ip } => {
            let site = espira::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            espira::server::start(&site, &ip, port).await?;
        }

        Commands::List {
            page,
            per_page,
            sort,
        } => {
            let site = espira::Site::new(&base_dir)?;
            espira::commands::list::run(&site, page, per_page, sort).await?;
        }

        Commands::Version => {
            println!("espira version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
