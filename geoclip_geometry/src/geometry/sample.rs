//! One-vertex sampling of GeoJSON geometries.
//!
//! A geometry is judged by a single representative position instead of by a
//! real spatial test: the first position of its first part. This is fast and
//! good enough for datasets where features lie clearly inside or outside the
//! region, but large geometries straddling the border, or whose first vertex
//! is an outlier, are classified by that one vertex only.

use super::GeometryKind;
use crate::GeoBBox;
use serde_json::Value;

/// Descends `depth` times into the first element of nested arrays.
///
/// Returns `None` as soon as a level is missing, is not an array or is empty.
/// With `depth == 0` the value itself is returned, unchecked.
#[must_use]
pub fn first_coordinate(value: &Value, depth: usize) -> Option<&Value> {
	let mut current = value;
	for _ in 0..depth {
		current = current.as_array()?.first()?;
	}
	Some(current)
}

impl GeometryKind {
	/// Picks the position that stands in for the whole geometry:
	///
	/// | kind | position |
	/// |---|---|
	/// | Point | the coordinates themselves |
	/// | LineString, MultiPoint | first position |
	/// | Polygon | first position of the outer ring |
	/// | MultiLineString | first position of the first line |
	/// | MultiPolygon | first position of the outer ring of the first polygon |
	#[must_use]
	pub fn representative_point<'a>(&self, coordinates: &'a Value) -> Option<&'a Value> {
		first_coordinate(coordinates, self.nesting_depth()?)
	}
}

/// Decides whether a geometry counts as lying inside `bbox`.
///
/// Unsupported geometry types, empty or missing coordinate levels and
/// malformed positions all yield `false`.
///
/// # Examples
/// ```
/// use geoclip_geometry::{GeoBBox, geometry_matches};
/// use serde_json::json;
///
/// let polygon = json!([[[1.0, 41.0], [5.0, 41.0], [5.0, 45.0], [1.0, 41.0]]]);
/// assert!(geometry_matches(&polygon, "Polygon", &GeoBBox::CATALONIA));
/// assert!(!geometry_matches(&json!([[]]), "Polygon", &GeoBBox::CATALONIA));
/// ```
#[must_use]
pub fn geometry_matches(coordinates: &Value, geometry_type: &str, bbox: &GeoBBox) -> bool {
	let kind = GeometryKind::from_type_name(geometry_type);
	match kind.representative_point(coordinates) {
		Some(point) => {
			log::trace!("{kind} sampled at {point}");
			bbox.contains(point)
		}
		None => false,
	}
}
