//! Clipping of GeoJSON feature collections to a geographic bounding box.
//!
//! - [`GeoBBox`]: the region of interest and the position test
//! - [`geometry_matches`]: samples one position per geometry and tests it
//! - [`GeoCollection`]: reading, filtering and writing feature collections
//! - [`filter_document`]: the complete file to file pipeline

mod bbox;
pub mod filter;
pub mod geojson;
pub mod geometry;

pub use bbox::*;
pub use filter::*;
pub use geojson::*;
pub use geometry::*;
