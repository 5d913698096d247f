//! Collaborator seams for the search orchestrator and their production
//! adapters (Postgres and Ola Maps).

use std::future::Future;

use ngodir_core::Organization;
use ngodir_db::OrganizationRow;
use ngodir_geocode::{GeocodeError, GeocodeResult, OlaMapsClient};
use sqlx::PgPool;

/// Boxed datastore failure, kept opaque so any store can back the search.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// The lookups the search needs from the organization datastore: equality on
/// city, equality on state, and a single range filter on latitude.
///
/// City and state arguments arrive already normalized (trimmed, lowercased).
pub trait OrganizationSource: Send + Sync {
    fn find_by_city(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<Organization>, SourceError>> + Send;

    fn find_by_state(
        &self,
        state: &str,
    ) -> impl Future<Output = Result<Vec<Organization>, SourceError>> + Send;

    /// Organizations with `south <= latitude <= north`. Longitude is not
    /// constrained.
    fn find_in_latitude_range(
        &self,
        south: f64,
        north: f64,
    ) -> impl Future<Output = Result<Vec<Organization>, SourceError>> + Send;
}

/// Forward geocoding: free-text address to a single best location.
pub trait Geocoder: Send + Sync {
    fn forward(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodeResult, GeocodeError>> + Send;
}

impl Geocoder for OlaMapsClient {
    async fn forward(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        self.geocode(address).await
    }
}

/// [`OrganizationSource`] backed by the `organizations` table.
#[derive(Debug, Clone)]
pub struct PgOrganizationSource {
    pool: PgPool,
}

impl PgOrganizationSource {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OrganizationSource for PgOrganizationSource {
    async fn find_by_city(&self, city: &str) -> Result<Vec<Organization>, SourceError> {
        let rows = ngodir_db::list_organizations_by_city(&self.pool, city).await?;
        into_organizations(rows)
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<Organization>, SourceError> {
        let rows = ngodir_db::list_organizations_by_state(&self.pool, state).await?;
        into_organizations(rows)
    }

    async fn find_in_latitude_range(
        &self,
        south: f64,
        north: f64,
    ) -> Result<Vec<Organization>, SourceError> {
        let rows = ngodir_db::list_organizations_in_latitude_range(&self.pool, south, north).await?;
        into_organizations(rows)
    }
}

fn into_organizations(rows: Vec<OrganizationRow>) -> Result<Vec<Organization>, SourceError> {
    rows.into_iter()
        .map(Organization::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}
