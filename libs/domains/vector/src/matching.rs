//! Similarity matching: query validation, text rendering and poster enrichment.

use domain_catalog::MovieCatalog;
use futures::future::join_all;
use serde_json::Value;
use tracing::warn;

use crate::error::{VectorError, VectorResult};
use crate::models::{EnrichedMatch, MatchRecord, MatchRequest};

pub const NO_MATCHES: &str = "No matches found";
pub const INVALID_EMBEDDING: &str = "Missing or invalid embedding in request";

/// Pull `prompt.embedding` out of a match request as a non-empty vector of numbers.
pub fn query_embedding(request: &MatchRequest) -> VectorResult<Vec<f32>> {
    let invalid = || VectorError::Validation(INVALID_EMBEDDING.to_string());

    let values = match request
        .prompt
        .as_ref()
        .and_then(|prompt| prompt.embedding.as_ref())
    {
        Some(Value::Array(values)) if !values.is_empty() => values,
        _ => return Err(invalid()),
    };

    values
        .iter()
        .map(|value| value.as_f64().map(|v| v as f32).ok_or_else(invalid))
        .collect()
}

/// Matched contents, one per line
pub fn render_text(records: &[MatchRecord]) -> String {
    if records.is_empty() {
        return NO_MATCHES.to_string();
    }

    records
        .iter()
        .map(|record| record.content().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Attach a poster URL to every record, looking them all up concurrently.
///
/// Lookup failures and unreadable ids degrade to `posterUrl: null`.
pub async fn enrich_with_posters(
    catalog: &dyn MovieCatalog,
    records: Vec<MatchRecord>,
) -> Vec<EnrichedMatch> {
    let lookups = records.into_iter().map(|record| async move {
        let poster_url = match record.movie_db_id() {
            Some(movie_id) => match catalog.poster_url(movie_id).await {
                Ok(url) => url,
                Err(err) => {
                    warn!(movie_id, error = %err, "Poster lookup failed");
                    None
                }
            },
            None => None,
        };

        EnrichedMatch { record, poster_url }
    });

    join_all(lookups).await
}
