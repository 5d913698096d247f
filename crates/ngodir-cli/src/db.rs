//! `db` sub-commands: connectivity check, migrations, and seeding.

use std::path::PathBuf;

use ngodir_core::AppConfig;

pub(crate) async fn run_ping(config: &AppConfig) -> anyhow::Result<()> {
    let pool = crate::connect(config).await?;
    ngodir_db::ping(&pool).await?;
    println!("database ok");
    Ok(())
}

pub(crate) async fn run_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = crate::connect(config).await?;
    let applied = ngodir_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

/// Upsert every organization in the seed file, keyed by owner id.
///
/// # Errors
///
/// Returns an error if the file cannot be read or validated, or if any
/// upsert fails (in which case nothing is written).
pub(crate) async fn run_seed(config: &AppConfig, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| config.seed_path.clone());
    let seeds = ngodir_core::load_organization_seeds(&path)?;

    let pool = crate::connect(config).await?;
    ngodir_db::run_migrations(&pool).await?;
    let count = ngodir_db::seed_organizations(&pool, &seeds.organizations).await?;

    tracing::info!(path = %path.display(), count, "seeded organizations");
    println!("seeded {count} organization(s) from {}", path.display());
    Ok(())
}
