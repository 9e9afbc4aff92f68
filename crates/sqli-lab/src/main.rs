//! sqli-lab CLI
//!
//! Sets up the sample catalog, dumps it, and compares the vulnerable and the
//! safe search from a terminal or a browser.

mod console;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sqli_lab_core::config::DEFAULT_DATABASE_PATH;
use sqli_lab_core::prelude::*;
use sqli_lab_core::present::render_dump;
use sqli_lab_web::{App, ServerConfig, DEFAULT_BIND};

/// Side-by-side demo of SQL injection against a product catalog.
#[derive(Debug, Parser)]
#[command(name = "sqli-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the SQLite database file.
    #[arg(short, long, env = "SQLI_LAB_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the products table and fill it with random products.
    Setup {
        /// Number of products to generate.
        #[arg(short, long, default_value_t = DEFAULT_SEED_COUNT)]
        records: usize,
    },

    /// Print the first rows of the products table.
    View {
        /// Maximum number of rows.
        #[arg(short, long, default_value_t = DEFAULT_DUMP_LIMIT)]
        limit: i64,
    },

    /// Search interactively, running both queries for every term.
    Search,

    /// Serve the web UI.
    Serve {
        /// Address to listen on.
        #[arg(short, long, env = "SQLI_LAB_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = Catalog::new(CatalogConfig::new(cli.database));

    match cli.command {
        Commands::Setup { records } => {
            prepare_storage(catalog.config().database_path())?;
            catalog.init_schema().await?;
            info!("Products table ready.");

            let products = generate_products(&mut rand::rng(), records);
            let inserted = catalog.populate(&products).await?;
            info!(count = inserted, "Sample products inserted.");
        }

        Commands::View { limit } => {
            info!(
                path = %catalog.config().database_path().display(),
                "Reading products table"
            );
            println!("\n{}", render_dump(&catalog.dump(limit).await));
        }

        Commands::Search => {
            let stdin = BufReader::new(tokio::io::stdin());
            console::run(&catalog, stdin, &mut std::io::stdout()).await?;
        }

        Commands::Serve { bind } => {
            sqli_lab_web::serve(ServerConfig::new(bind), App::new(catalog)).await?;
        }
    }

    Ok(())
}
