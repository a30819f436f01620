use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use tracing::{info, warn};

use sales_mcp::config::ServerConfig;
use sales_mcp::db::{seed_demo_data, Database};
use sales_mcp::errors::{Result, SalesAgentError};
use sales_mcp::logging;
use sales_mcp::mcp::McpServer;
use sales_mcp::tools::default_registry;

/// MCP server for sales, product, customer and order data.
#[derive(Parser)]
#[command(name = "sales-mcp", about = "MCP server for sales data over stdio", version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdin/stdout (default)
    Serve {
        /// SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
        /// Server name announced to clients
        #[arg(long)]
        name: Option<String>,
    },
    /// Create the database and apply the schema
    Init {
        /// SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Replace the database contents with demo data
    Seed {
        /// SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
        /// Fixed RNG seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve { db: None, name: None }) {
        Commands::Serve { db, name } => {
            if db.is_some() {
                config.db_path = db;
            }
            if let Some(name) = name {
                config.name = name;
            }

            let store = open_store(&config);
            let server = McpServer::new(config.name, config.version, default_registry(store));
            server.run_stdio().await?;
        }
        Commands::Init { db } => {
            let path = require_db_path(db, &config)?;
            Database::initialize(&path)?;
            println!("Initialized database at {}", path.display());
        }
        Commands::Seed { db, seed } => {
            let path = require_db_path(db, &config)?;
            let store = Database::initialize(&path)?;
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let counts = seed_demo_data(&store, &mut rng)?;
            println!(
                "Seeded {} records (products: {}, customers: {}, sales: {}) into {}",
                counts.total(),
                counts.products,
                counts.customers,
                counts.sales,
                path.display()
            );
        }
    }
    Ok(())
}

/// Opens the configured store. Any failure falls back to mock mode.
fn open_store(config: &ServerConfig) -> Option<Rc<Database>> {
    let Some(path) = config.resolved_db_path() else {
        warn!("no database path available, serving query_sales in mock mode");
        return None;
    };

    match Database::open(&path) {
        Ok(db) => {
            info!(path = %path.display(), "opened sales database");
            Some(Rc::new(db))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "database unavailable, serving query_sales in mock mode");
            None
        }
    }
}

fn require_db_path(db: Option<PathBuf>, config: &ServerConfig) -> Result<PathBuf> {
    db.or_else(|| config.resolved_db_path())
        .ok_or_else(|| SalesAgentError::Config {
            message: "no database path: pass --db or set SALES_DB_PATH".to_string(),
        })
}
