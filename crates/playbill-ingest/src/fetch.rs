//! Blocking feed retrieval.
//!
//! The feed source is either an `http(s)` URL (the published spreadsheet
//! export) or a local file path. Both return raw bytes; decoding is a
//! separate step so transport and charset concerns stay apart.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Fetch the raw feed bytes from a URL or local path.
///
/// A non-success HTTP status is an error; there are no retries. The tool is
/// batch, fail-fast, and re-run on schedule.
pub fn fetch_feed(source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        let path = Path::new(source);
        let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), byte_count = bytes.len(), "feed read from file");
        Ok(bytes)
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url).map_err(|source| IngestError::Fetch {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::FetchStatus {
            url: url.to_string(),
            status,
        });
    }
    let bytes = response
        .bytes()
        .map_err(|source| IngestError::Fetch {
            url: url.to_string(),
            source,
        })?
        .to_vec();
    debug!(url, byte_count = bytes.len(), "feed fetched");
    Ok(bytes)
}
