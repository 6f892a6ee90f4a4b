use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::GalleryError;
use crate::fetcher::Fetcher;
use crate::models::UserRecord;

/// Download one user's thumbnail into `dir`, writing the response body
/// verbatim. Returns the path of the written file.
pub fn save_thumbnail<F: Fetcher>(
    fetcher: &F,
    user: &UserRecord,
    dir: &Path,
) -> Result<PathBuf, GalleryError> {
    let url = Url::parse(&user.picture.thumbnail).map_err(|e| {
        GalleryError::MalformedResponse(format!(
            "invalid thumbnail url {:?}: {e}",
            user.picture.thumbnail
        ))
    })?;

    let body = fetcher.fetch(url.as_str())?;

    let path = dir.join(user.thumbnail_filename());
    fs::write(&path, &body).map_err(|source| GalleryError::Filesystem {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
