mod db;
mod geocode;
mod orgs;
mod search;
mod submissions;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ngodir_core::{AppConfig, OrganizationStatus, VerificationBadge};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "ngodir-cli")]
#[command(about = "Non-profit organization directory command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Search organizations by city, state, or address
    Search {
        /// City, state, or free-text address
        query: String,
        /// Radius around a geocoded address, in kilometres
        #[arg(long)]
        radius_km: Option<f64>,
        /// Print the raw search result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve an address to coordinates
    Geocode {
        address: String,
    },
    /// Resolve coordinates to an address
    ReverseGeocode {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Organization verification
    Orgs {
        #[command(subcommand)]
        command: OrgsCommands,
    },
    /// Organizations suggested by the public
    Submissions {
        #[command(subcommand)]
        command: SubmissionsCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    Ping,
    Migrate,
    /// Upsert organizations from the seed file
    Seed {
        /// Seed file; defaults to NGODIR_SEED_PATH
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum OrgsCommands {
    /// List organizations awaiting verification
    Pending,
    /// Record a verification decision
    Verify {
        public_id: Uuid,
        #[arg(long)]
        status: OrganizationStatus,
        /// Badge to award on activation (defaults to verified)
        #[arg(long)]
        badge: Option<VerificationBadge>,
        /// Required when suspending
        #[arg(long)]
        reason: Option<String>,
        /// Admin recorded as the verifier
        #[arg(long)]
        by: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum SubmissionsCommands {
    List,
    /// Mark a submission as registered
    Registered { public_id: Uuid },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("ngodir-cli ready; run with --help for commands");
        return Ok(());
    };

    let config = ngodir_core::load_app_config()?;
    match command {
        Commands::Db { command } => match command {
            DbCommands::Ping => db::run_ping(&config).await,
            DbCommands::Migrate => db::run_migrate(&config).await,
            DbCommands::Seed { path } => db::run_seed(&config, path).await,
        },
        Commands::Search {
            query,
            radius_km,
            json,
        } => search::run_search(&config, &query, radius_km, json).await,
        Commands::Geocode { address } => geocode::run_geocode(&config, &address).await,
        Commands::ReverseGeocode { lat, lng } => {
            geocode::run_reverse_geocode(&config, lat, lng).await
        }
        Commands::Orgs { command } => {
            let pool = connect(&config).await?;
            match command {
                OrgsCommands::Pending => orgs::run_pending(&pool).await,
                OrgsCommands::Verify {
                    public_id,
                    status,
                    badge,
                    reason,
                    by,
                } => orgs::run_verify(&pool, public_id, status, badge, reason, by).await,
            }
        }
        Commands::Submissions { command } => {
            let pool = connect(&config).await?;
            match command {
                SubmissionsCommands::List => submissions::run_list(&pool).await,
                SubmissionsCommands::Registered { public_id } => {
                    submissions::run_mark_registered(&pool, public_id).await
                }
            }
        }
    }
}

async fn connect(config: &AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = ngodir_db::PoolConfig::from_app_config(config);
    Ok(ngodir_db::connect_pool(&config.database_url, pool_config).await?)
}

/// Shorten `value` to at most `max_chars` characters for table output.
pub(crate) fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        format!("{}...", value.chars().take(max_chars - 3).collect::<String>())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests;
