//! Admin verification commands.

use ngodir_core::{Organization, OrganizationStatus, VerificationBadge};
use ngodir_db::StatusChange;
use sqlx::PgPool;
use uuid::Uuid;

use crate::truncate;

pub(crate) async fn run_pending(pool: &PgPool) -> anyhow::Result<()> {
    let rows =
        ngodir_db::list_organizations_by_status(pool, OrganizationStatus::PendingVerification)
            .await?;

    if rows.is_empty() {
        println!("no organizations awaiting verification");
        return Ok(());
    }

    println!(
        "{:<38}{:<34}{:<18}{:<18}SUBMITTED",
        "PUBLIC ID", "NAME", "CITY", "OWNER"
    );
    for row in rows {
        let org = Organization::try_from(row)?;
        println!(
            "{:<38}{:<34}{:<18}{:<18}{}",
            org.public_id,
            truncate(&org.name, 32),
            truncate(&org.address.city, 16),
            truncate(&org.owner_id, 16),
            org.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

pub(crate) async fn run_verify(
    pool: &PgPool,
    public_id: Uuid,
    status: OrganizationStatus,
    badge: Option<VerificationBadge>,
    reason: Option<String>,
    verified_by: Option<String>,
) -> anyhow::Result<()> {
    let change = StatusChange {
        status,
        badge,
        reason,
        verified_by,
    };
    let row = ngodir_db::set_organization_status(pool, public_id, &change).await?;
    let org = Organization::try_from(row)?;

    println!("{} is now {}", org.name, org.status);
    if let Some(badge) = org.verification_badge {
        println!("badge: {}", badge.as_str());
    }
    if let Some(reason) = &org.suspension_reason {
        println!("reason: {reason}");
    }
    Ok(())
}
