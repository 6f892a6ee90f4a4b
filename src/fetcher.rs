use std::io::Read;

use crate::error::GalleryError;

/// Seam over plain HTTP GET so the pipeline can run against a mock in tests.
pub trait Fetcher {
    /// Fetch `url` and return the whole response body. Non-2xx statuses and
    /// transport failures come back as errors.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, GalleryError>;
}

pub struct UreqFetcher;

impl UreqFetcher {
    pub fn new() -> Self {
        UreqFetcher
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, GalleryError> {
        match ureq::get(url).call() {
            Ok(response) => {
                let mut body = Vec::new();
                response.into_reader().read_to_end(&mut body).map_err(|e| {
                    GalleryError::Network {
                        url: url.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(body)
            }
            Err(ureq::Error::Status(status, _)) => Err(GalleryError::RemoteService {
                status,
                url: url.to_string(),
            }),
            Err(err) => Err(GalleryError::Network {
                url: url.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
pub use mock::MockFetcher;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_replays_responses_in_order_and_records_calls() {
        let fetcher = MockFetcher::new(vec![Ok(b"first".to_vec()), Ok(b"second".to_vec())]);

        assert_eq!(fetcher.fetch("https://a.example").unwrap(), b"first");
        assert_eq!(fetcher.fetch("https://b.example").unwrap(), b"second");
        assert_eq!(fetcher.calls(), vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn exhausted_mock_reports_a_network_error() {
        let fetcher = MockFetcher::new(vec![]);
        let err = fetcher.fetch("https://a.example").unwrap_err();
        assert!(matches!(err, GalleryError::Network { .. }));
    }
}
