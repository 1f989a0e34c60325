use std::fmt::Display;

/// The geometry types a GeoJSON feature may declare.
///
/// Type names are matched case-sensitively. Everything that is not one of the six
/// single-part or multi-part geometry types (including `"GeometryCollection"`)
/// becomes [`GeometryKind::Unsupported`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	Unsupported,
}

impl GeometryKind {
	#[must_use]
	pub fn from_type_name(name: &str) -> Self {
		match name {
			"Point" => GeometryKind::Point,
			"LineString" => GeometryKind::LineString,
			"Polygon" => GeometryKind::Polygon,
			"MultiPoint" => GeometryKind::MultiPoint,
			"MultiLineString" => GeometryKind::MultiLineString,
			"MultiPolygon" => GeometryKind::MultiPolygon,
			_ => GeometryKind::Unsupported,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::LineString => "LineString",
			GeometryKind::Polygon => "Polygon",
			GeometryKind::MultiPoint => "MultiPoint",
			GeometryKind::MultiLineString => "MultiLineString",
			GeometryKind::MultiPolygon => "MultiPolygon",
			GeometryKind::Unsupported => "Unsupported",
		}
	}

	/// Number of array levels wrapped around a single position.
	///
	/// `None` for [`GeometryKind::Unsupported`].
	#[must_use]
	pub fn nesting_depth(&self) -> Option<usize> {
		match self {
			GeometryKind::Point => Some(0),
			GeometryKind::LineString | GeometryKind::MultiPoint => Some(1),
			GeometryKind::Polygon | GeometryKind::MultiLineString => Some(2),
			GeometryKind::MultiPolygon => Some(3),
			GeometryKind::Unsupported => None,
		}
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.type_name())
	}
}
