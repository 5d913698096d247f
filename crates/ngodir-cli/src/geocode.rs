use ngodir_core::{is_valid_coordinates, AppConfig};
use ngodir_geocode::OlaMapsClient;

/// Client configured from `OLA_MAPS_API_KEY` and the geocode settings.
pub(crate) fn build_geocoder(config: &AppConfig) -> anyhow::Result<OlaMapsClient> {
    let api_key = config
        .olamaps_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("OLA_MAPS_API_KEY is required for geocoding"))?;

    let client = OlaMapsClient::with_base_url(
        api_key,
        config.geocode_timeout_secs,
        &config.geocode_base_url,
    )?
    .with_retry(
        config.geocode_max_retries,
        config.geocode_retry_backoff_base_ms,
    );
    Ok(client)
}

pub(crate) async fn run_geocode(config: &AppConfig, address: &str) -> anyhow::Result<()> {
    let client = build_geocoder(config)?;
    let result = client.geocode(address).await?;

    println!("{}", result.formatted_address);
    println!("lat:      {}", result.lat);
    println!("lng:      {}", result.lng);
    println!("place id: {}", result.place_id);
    Ok(())
}

pub(crate) async fn run_reverse_geocode(
    config: &AppConfig,
    lat: f64,
    lng: f64,
) -> anyhow::Result<()> {
    if !is_valid_coordinates(lat, lng) {
        anyhow::bail!("invalid coordinates: {lat}, {lng}");
    }

    let client = build_geocoder(config)?;
    let result = client.reverse_geocode(lat, lng).await?;

    println!("{}", result.formatted_address);
    for component in &result.address_components {
        println!(
            "  {:<28}{}",
            component.types.join(","),
            component.long_name
        );
    }
    Ok(())
}
