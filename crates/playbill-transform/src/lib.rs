//! The row-to-record transformation pipeline.
//!
//! Stages run strictly left to right: raw rows are assembled into
//! normalized records, filtered for visibility and identity, then annotated
//! with lifecycle status and soon-window flags. No stage depends on a later
//! stage's output order.

pub mod assemble;
pub mod filter;
pub mod lifecycle;
pub mod normalize;

pub use assemble::assemble;
pub use filter::{FilterDecision, accept};
pub use lifecycle::{
    OPEN_ENDED_SENTINEL, annotate, derive_status, drops_in_strict_mode, parse_show_date,
};
pub use normalize::{canonical_key, normalize};
