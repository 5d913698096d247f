//! Heuristic split between "simple location" queries (a city or state name,
//! answerable by exact match) and full addresses that need geocoding.

/// Substrings that mark a query as a street address. Matching is plain
/// substring containment on the lowercased query, so "mainland" hits "main".
pub const DEFAULT_ADDRESS_INDICATORS: &[&str] = &[
    "road",
    "street",
    "avenue",
    "lane",
    "nagar",
    "colony",
    "sector",
    "block",
    "near",
    "behind",
    "opposite",
    "plot",
    "house",
    "building",
    "floor",
    "apartment",
    "flat",
    "villa",
    "complex",
    "society",
    "phase",
    "main",
    "bypass",
    "highway",
    "circle",
    "square",
    "vistar",
    "marg",
    "path",
    "gali",
    "chowk",
];

/// Classifies free-text search queries.
///
/// The indicator list is data, not code: deployments in other locales pass
/// their own list through [`QueryClassifier::with_indicators`].
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    indicators: Vec<String>,
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self {
            indicators: DEFAULT_ADDRESS_INDICATORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl QueryClassifier {
    /// Build a classifier from a custom indicator list. Entries are
    /// lowercased and blanks are dropped.
    #[must_use]
    pub fn with_indicators<I, S>(indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            indicators: indicators
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Returns `true` when `query` looks like a bare city or state name.
    ///
    /// 1. Two or fewer whitespace-separated tokens → simple.
    /// 2. Any address indicator substring present → address.
    /// 3. Any digit present → address.
    /// 4. Otherwise → simple.
    #[must_use]
    pub fn is_simple_location(&self, query: &str) -> bool {
        let normalized = normalize_query(query);

        if normalized.split_whitespace().count() <= 2 {
            return true;
        }

        if self
            .indicators
            .iter()
            .any(|indicator| normalized.contains(indicator.as_str()))
        {
            return false;
        }

        !normalized.chars().any(|c| c.is_ascii_digit())
    }
}

/// Lowercase and trim a raw query. This is the form used for exact-match
/// city/state lookups.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
