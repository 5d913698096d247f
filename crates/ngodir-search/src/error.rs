use ngodir_geocode::GeocodeError;
use thiserror::Error;

use crate::source::SourceError;

/// A failed search. The display text is the same generic message for every
/// variant; the collaborator's error is available through `source()`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to search organizations")]
    Geocode(#[source] GeocodeError),

    #[error("failed to search organizations")]
    Datastore(#[source] SourceError),

    #[error("failed to search organizations: radius must be a positive number of km, got {0}")]
    InvalidRadius(f64),
}
