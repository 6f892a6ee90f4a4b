use tracing::debug;

use crate::error::GalleryError;
use crate::fetcher::Fetcher;
use crate::models::{ApiResponse, UserRecord};

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Fetch `count` random users in one request. The order of the returned
/// records is the order the API sent them in; callers rely on it staying
/// stable through the rest of the pipeline.
pub fn fetch_users<F: Fetcher>(
    fetcher: &F,
    api_url: &str,
    count: u32,
) -> Result<Vec<UserRecord>, GalleryError> {
    let url = format!("{api_url}?results={count}");
    debug!(%url, "requesting user list");

    let body = fetcher.fetch(&url)?;
    let response: ApiResponse = serde_json::from_slice(&body)
        .map_err(|e| GalleryError::MalformedResponse(e.to_string()))?;

    Ok(response.results)
}
