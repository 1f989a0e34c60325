//! # geoclip
//!
//! geoclip keeps the features of a GeoJSON `FeatureCollection` that lie inside a
//! region of interest and writes them to a new file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use geoclip::{config::Config, geometry::filter_document};
//!
//! let options = Config::from_string("bbox: [0.0, 40.5, 3.3, 42.9]")
//!     .unwrap()
//!     .into_options()
//!     .unwrap();
//!
//! let summary = filter_document(&options).unwrap();
//! println!("{summary}");
//! ```

pub mod config;

pub use geoclip_geometry as geometry;
