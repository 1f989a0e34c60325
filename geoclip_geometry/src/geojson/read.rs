use super::GeoCollection;
use serde_json::Value;

/// Parses a GeoJSON document. Documents that are not a `FeatureCollection`
/// result in an empty collection.
pub fn parse_geojson(json: &str) -> serde_json::Result<GeoCollection> {
	let document: Value = serde_json::from_str(json)?;
	Ok(GeoCollection::from_document(document))
}
