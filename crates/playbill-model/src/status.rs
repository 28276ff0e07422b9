//! Run-relative lifecycle status.

use std::fmt;

/// Where a show sits relative to the run date.
///
/// Ordering follows the timeline: a record can only move
/// `Future` → `Active` → `Inactive` as the run date advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShowStatus {
    Future,
    Active,
    Inactive,
}

impl ShowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Future => "future",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
