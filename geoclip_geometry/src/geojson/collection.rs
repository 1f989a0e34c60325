use crate::{GeoBBox, geometry_matches};
use serde_json::{Map, Value};

/// The features of a GeoJSON `FeatureCollection`.
///
/// Features are kept as raw JSON values so that everything besides the geometry
/// (ids, properties, foreign members, key order) is passed through untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<Value>,
}

impl GeoCollection {
	pub fn new(features: Vec<Value>) -> Self {
		Self { features }
	}

	/// Takes the features out of a parsed GeoJSON document.
	///
	/// Only a top-level object with `"type": "FeatureCollection"` contributes
	/// features. Any other document yields an empty collection, as does a
	/// missing or non-array `"features"` member.
	pub fn from_document(document: Value) -> Self {
		let Value::Object(mut object) = document else {
			log::debug!("document is not a JSON object");
			return Self::default();
		};

		match object.get("type").and_then(Value::as_str) {
			Some("FeatureCollection") => {}
			other => {
				log::debug!("document type is {other:?}, expected \"FeatureCollection\"");
				return Self::default();
			}
		}

		match object.remove("features") {
			Some(Value::Array(features)) => Self::new(features),
			_ => Self::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Keeps the features that [`feature_matches`] the bounding box, in their
	/// original order.
	#[must_use]
	pub fn filtered(self, bbox: &GeoBBox) -> GeoCollection {
		let features = self
			.features
			.into_iter()
			.enumerate()
			.filter_map(|(index, feature)| {
				if feature_matches(&feature, bbox) {
					Some(feature)
				} else {
					log::debug!("dropping feature #{index}");
					None
				}
			})
			.collect();
		GeoCollection { features }
	}

	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("FeatureCollection"));
		obj.insert("features".to_string(), Value::Array(self.features.clone()));
		Value::Object(obj)
	}

	/// Serializes the collection with two-space indentation. Non-ASCII
	/// characters are written verbatim.
	pub fn to_pretty_string(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(&self.to_json())
	}
}

/// Returns the declared geometry type and the coordinates of a feature.
///
/// `None` if the feature has no geometry object, no string `"type"` or no
/// (or `null`) `"coordinates"`.
pub fn feature_geometry(feature: &Value) -> Option<(&str, &Value)> {
	let geometry = feature.get("geometry")?.as_object()?;
	let geometry_type = geometry.get("type")?.as_str()?;
	match geometry.get("coordinates")? {
		Value::Null => None,
		coordinates => Some((geometry_type, coordinates)),
	}
}

/// Decides whether a feature is kept when clipping to `bbox`.
pub fn feature_matches(feature: &Value, bbox: &GeoBBox) -> bool {
	match feature_geometry(feature) {
		Some((geometry_type, coordinates)) => geometry_matches(coordinates, geometry_type, bbox),
		None => false,
	}
}
