//! Data model for the show feed pipeline.

pub mod options;
pub mod record;
pub mod status;
pub mod value;

pub use options::{DEFAULT_SOON_WINDOW_DAYS, PipelineOptions, RunContext};
pub use record::{RawRow, Record};
pub use status::ShowStatus;
pub use value::CellValue;
