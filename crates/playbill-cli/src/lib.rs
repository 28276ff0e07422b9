//! Library components for the show feed snapshot CLI.

pub mod logging;
pub mod pipeline;
pub mod summary;
