use sqlx::PgPool;
use uuid::Uuid;

use crate::truncate;

pub(crate) async fn run_list(pool: &PgPool) -> anyhow::Result<()> {
    let rows = ngodir_db::list_user_submissions(pool).await?;

    if rows.is_empty() {
        println!("no submissions yet");
        return Ok(());
    }

    println!(
        "{:<38}{:<30}{:<20}{:<12}SUBMITTED",
        "PUBLIC ID", "ORGANIZATION", "SUBMITTED BY", "REGISTERED"
    );
    for row in &rows {
        println!(
            "{:<38}{:<30}{:<20}{:<12}{}",
            row.public_id,
            truncate(&row.ngo_name, 28),
            truncate(&row.user_name, 18),
            if row.ngo_registered { "yes" } else { "no" },
            row.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

pub(crate) async fn run_mark_registered(pool: &PgPool, public_id: Uuid) -> anyhow::Result<()> {
    let row = ngodir_db::mark_submission_registered(pool, public_id).await?;
    println!("marked '{}' as registered", row.ngo_name);
    Ok(())
}
