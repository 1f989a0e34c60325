//! GeoJSON input and output.
//!
//! Documents are parsed with `serde_json` into raw values; only the parts needed
//! to decide whether a feature is kept are inspected, and kept features are
//! written back unchanged.

mod collection;
mod read;

pub use collection::*;
pub use read::*;
