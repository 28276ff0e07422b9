//! Feed ingestion: fetch bytes, decode, parse CSV into raw rows.

pub mod error;
pub mod feed;
pub mod fetch;

pub use error::IngestError;
pub use feed::{decode_feed, parse_feed};
pub use fetch::fetch_feed;
