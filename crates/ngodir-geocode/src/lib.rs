//! Client for the Ola Maps places API: forward geocoding (address to
//! coordinates) and reverse geocoding (coordinates to address).

pub mod client;
pub mod error;
pub(crate) mod request_id;
pub(crate) mod retry;
pub mod types;

pub use client::OlaMapsClient;
pub use error::GeocodeError;
pub use types::{AddressComponent, GeocodeResult, ReverseGeocodeResult};
