use anyhow::{Context, Result, ensure};
use serde_json::Value;
use std::{fmt::Debug, str::FromStr};

/// A geographical bounding box (`GeoBBox`) represents a rectangular area on a map
/// defined by its minimum and maximum longitude (x) and latitude (y) coordinates.
///
/// The bounding box is defined by four `f64` values:
/// - `x_min` (west): Minimum longitude.
/// - `y_min` (south): Minimum latitude.
/// - `x_max` (east): Maximum longitude.
/// - `y_max` (north): Maximum latitude.
///
/// All bounds are inclusive.
///
/// # Examples
///
/// ```
/// use geoclip_geometry::GeoBBox;
///
/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert!(bbox.contains_point(10.0, 0.0));
/// assert!(!bbox.contains_point(10.5, 0.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[allow(clippy::manual_non_exhaustive)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
	phantom: (),
}

impl GeoBBox {
	/// Approximate bounding box of Catalonia, the default region of interest.
	pub const CATALONIA: GeoBBox = GeoBBox {
		x_min: 0.0,
		y_min: 40.5,
		x_max: 3.3,
		y_max: 42.9,
		phantom: (),
	};

	/// Creates a new `GeoBBox` from four `f64` values:
	/// `west, south, east, north`.
	///
	/// # Errors
	///
	/// Fails if a value lies outside of the WGS84 range, or if a minimum is
	/// greater than its maximum.
	///
	/// # Examples
	/// ```
	/// use geoclip_geometry::GeoBBox;
	///
	/// let bbox = GeoBBox::new(0.0, 40.5, 3.3, 42.9).unwrap();
	/// assert_eq!(bbox, GeoBBox::CATALONIA);
	/// assert!(GeoBBox::new(3.3, 40.5, 0.0, 42.9).is_err());
	/// ```
	#[must_use = "GeoBBox::new returns a Result; handle the error or unwrap"]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
			phantom: (),
		}
		.checked()
	}

	/// Returns `true` if the point lies inside the bounding box, borders included.
	#[must_use]
	pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
		self.x_min <= lon && lon <= self.x_max && self.y_min <= lat && lat <= self.y_max
	}

	/// Tests a raw GeoJSON position against the bounding box.
	///
	/// The position must be an array of exactly two numbers `[lon, lat]`.
	/// Any other shape is not a valid position and is never contained.
	///
	/// # Examples
	/// ```
	/// use geoclip_geometry::GeoBBox;
	/// use serde_json::json;
	///
	/// let bbox = GeoBBox::CATALONIA;
	/// assert!(bbox.contains(&json!([2.17, 41.38])));
	/// assert!(!bbox.contains(&json!([2.17, 41.38, 12.0])));
	/// assert!(!bbox.contains(&json!(["2.17", 41.38])));
	/// ```
	#[must_use]
	pub fn contains(&self, position: &Value) -> bool {
		match parse_position(position) {
			Some((lon, lat)) => self.contains_point(lon, lat),
			None => false,
		}
	}

	/// Returns the bounding box as a string in the form `x_min,y_min,x_max,y_max`,
	/// the same form [`FromStr`] accepts.
	#[must_use]
	pub fn as_string_list(&self) -> String {
		format!("{},{},{},{}", self.x_min, self.y_min, self.x_max, self.y_max)
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.x_min >= -180., "x_min ({}) must be >= -180", self.x_min);
		ensure!(self.y_min >= -90., "y_min ({}) must be >= -90", self.y_min);
		ensure!(self.x_max <= 180., "x_max ({}) must be <= 180", self.x_max);
		ensure!(self.y_max <= 90., "y_max ({}) must be <= 90", self.y_max);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Default for GeoBBox {
	fn default() -> Self {
		GeoBBox::CATALONIA
	}
}

fn parse_position(position: &Value) -> Option<(f64, f64)> {
	match position.as_array()?.as_slice() {
		[lon, lat] => Some((lon.as_f64()?, lat.as_f64()?)),
		_ => None,
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = anyhow::Error;

	/// Attempts to build a `GeoBBox` from a `Vec<f64>` with exactly four elements
	/// `[west, south, east, north]`.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"GeoBBox must have 4 elements (x_min, y_min, x_max, y_max), but got {}",
			input.len()
		);
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}

impl FromStr for GeoBBox {
	type Err = anyhow::Error;

	/// Parses `"lon_min,lat_min,lon_max,lat_max"`. Values may be separated by
	/// commas, spaces or semicolons.
	fn from_str(text: &str) -> Result<Self> {
		log::trace!("parsing bbox: {text:?}");
		let values = text
			.split(&[' ', ',', ';'])
			.filter(|s| !s.is_empty())
			.map(|s| s.parse::<f64>().with_context(|| format!("bbox value {s:?} is not a number")))
			.collect::<Result<Vec<f64>>>()?;

		GeoBBox::try_from(values).with_context(|| format!("invalid bbox {text:?}"))
	}
}
