//! `rackmap`: run one topology query against the inventory database and
//! print the result as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rackmap_core::types::{DbId, LookupId, ANY_LINK_TYPE};
use rackmap_db::repositories::{DictionaryRepo, ElementRepo, GroupRepo, LinkRepo, TopologyRepo};

mod config;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "rackmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query asset topology and power links", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an element by name or alias
    Element { name: String },

    /// List every element of a type
    ElementsOfType { type_id: LookupId },

    /// Show an element with its ancestor chain
    Ancestors { element_id: DbId },

    /// List links touching a device as `out:src:in:dest` records
    Links {
        device_id: DbId,
        /// Restrict to one link type (0 = any)
        #[arg(long, default_value_t = ANY_LINK_TYPE)]
        link_type: LookupId,
    },

    /// List the element ids in a group
    Group { group_id: DbId },

    /// List power links visible from inside a container
    Container { element_id: DbId },

    /// Dump an enumeration table
    Dictionary { table: DictionaryTable },

    /// Check that the database answers
    Health,
}

#[derive(Clone, Copy, ValueEnum)]
enum DictionaryTable {
    ElementTypes,
    DeviceTypes,
    LinkTypes,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rackmap_db=info,rackmap=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = CliConfig::from_env()?;
    init_tracing(config.log_format);

    let pool = rackmap_db::create_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::debug!("Database connection pool created");

    if config.run_migrations {
        rackmap_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    if let Commands::Health = cli.command {
        rackmap_db::health_check(&pool)
            .await
            .context("Database health check failed")?;
        return print_json(&serde_json::json!({ "status": "ok" }));
    }

    let mut conn = pool.acquire().await.context("Failed to acquire connection")?;

    match cli.command {
        Commands::Element { name } => {
            print_json(&ElementRepo::find_by_name(&mut conn, &name).await)
        }
        Commands::ElementsOfType { type_id } => {
            print_json(&ElementRepo::list_by_type(&mut conn, type_id).await)
        }
        Commands::Ancestors { element_id } => {
            print_json(&ElementRepo::find_with_ancestors(&mut conn, element_id).await)
        }
        Commands::Links {
            device_id,
            link_type,
        } => print_json(&LinkRepo::list_for_device(&mut conn, device_id, link_type).await),
        Commands::Group { group_id } => {
            let members = GroupRepo::list_elements(&mut conn, group_id).await?;
            print_json(&members)
        }
        Commands::Container { element_id } => {
            print_json(&TopologyRepo::links_under_container(&mut conn, element_id).await)
        }
        Commands::Dictionary { table } => {
            let reply = match table {
                DictionaryTable::ElementTypes => DictionaryRepo::element_types(&mut conn).await,
                DictionaryTable::DeviceTypes => DictionaryRepo::device_types(&mut conn).await,
                DictionaryTable::LinkTypes => DictionaryRepo::link_types(&mut conn).await,
            };
            print_json(&reply)
        }
        Commands::Health => Ok(()),
    }
}
