//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// A missing `url` field decodes as an empty string and is rejected by the
/// service as an empty URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// Response for a created (or previously created) short link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub long_url: String,
}
