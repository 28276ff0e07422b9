use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("fetch {url}: server returned {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse csv: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
