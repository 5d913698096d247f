use rand::distr::Alphanumeric;
use rand::Rng;

/// Opaque per-call id sent as `X-Request-Id`.
pub(crate) fn generate_request_id() -> String {
    tagged_id("req")
}

/// Opaque per-call id sent as `X-Correlation-Id`.
pub(crate) fn generate_correlation_id() -> String {
    tagged_id("corr")
}

fn tagged_id(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!(
        "{prefix}_{}_{suffix}",
        chrono::Utc::now().timestamp_millis()
    )
}
