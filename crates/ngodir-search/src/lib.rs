//! Organization search: classifies a free-text query, then either matches
//! it against city/state names or geocodes it and ranks organizations by
//! distance.

pub mod error;
pub mod orchestrator;
pub mod result;
pub mod source;

pub use error::SearchError;
pub use orchestrator::{
    find_by_city_or_state, find_in_bounding_box, smart_search_organizations, DEFAULT_RADIUS_KM,
};
pub use result::{RankedOrganization, SearchKind, SearchResult};
pub use source::{Geocoder, OrganizationSource, PgOrganizationSource, SourceError};
