//! Recommendation engine module
//!
//! Pure, deterministic pattern selection: filter by workload and node
//! range, rank with an explicit score key, report sizing notes.

mod recommend;

pub use recommend::*;
