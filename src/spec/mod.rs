//! GPU spec resolution module
//!
//! Static table lookup with a remote inference fallback.

mod lookup;
mod nim;

pub use lookup::*;
pub use nim::*;
