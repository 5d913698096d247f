use ngodir_core::AppConfig;
use ngodir_search::{smart_search_organizations, PgOrganizationSource, SearchKind, SearchResult};

pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    radius_km: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let radius_km = radius_km.unwrap_or(config.search_default_radius_km);
    if radius_km > config.search_max_radius_km {
        anyhow::bail!(
            "radius must be at most {} km, got {radius_km}",
            config.search_max_radius_km
        );
    }

    let pool = crate::connect(config).await?;
    let geocoder = crate::geocode::build_geocoder(config)?;
    let source = PgOrganizationSource::new(pool);
    let classifier = config.query_classifier();

    let result =
        smart_search_organizations(&source, &geocoder, &classifier, query, radius_km).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &SearchResult) {
    if let (SearchKind::Address, Some(location)) = (result.kind, &result.search_location) {
        println!(
            "near {} ({:.5}, {:.5})",
            location.formatted_address, location.lat, location.lng
        );
    }

    if result.organizations.is_empty() {
        println!("no organizations found");
        return;
    }

    println!(
        "{:<10}{:<36}{:<18}{:<22}STATUS",
        "DISTANCE", "NAME", "CITY", "TYPE"
    );
    for ranked in &result.organizations {
        let org = &ranked.organization;
        println!(
            "{:<10}{:<36}{:<18}{:<22}{}",
            ranked.distance_formatted.as_deref().unwrap_or("-"),
            crate::truncate(&org.name, 34),
            crate::truncate(&org.address.city, 16),
            org.org_type.label(),
            org.status
        );
    }
}
