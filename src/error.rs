use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure mode of a run. All of these are fatal: nothing is caught
/// or retried below `main`, which prints the message and sets the exit code.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Directory exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("{url} returned HTTP {status}")]
    RemoteService { status: u16, url: String },

    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GalleryError {
    /// Process exit code for this error. The pre-flight directory check has
    /// its own code so callers can tell it apart from network trouble.
    pub fn exit_code(&self) -> i32 {
        match self {
            GalleryError::DirectoryExists(_) => 1,
            _ => 2,
        }
    }
}
