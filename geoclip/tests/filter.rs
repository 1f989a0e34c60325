use predicates::str;
use pretty_assertions::assert_eq;
use std::fs;
use test_utilities::*;

#[test]
fn filter_testdata() -> Result<(), Box<dyn std::error::Error>> {
	let input = get_testdata("zones.geojson");
	let (_dir, output) = get_temp_output("zones_catalunya.geojson");

	geoclip_cmd()
		.args(["filter", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("original number of features: 7"))
		.stdout(str::contains("number of features inside the region: 4"))
		.stdout(str::contains("zones_catalunya.geojson"));

	assert_eq!(get_identifiers(&output), ["LEBL-CTR", "LEGE-ATZ", "LEDA-ATZ", "LERS-ATZ"]);

	let text = fs::read_to_string(&output)?;
	assert!(text.starts_with("{\n  \"type\": \"FeatureCollection\",\n  \"features\": [\n    {\n"));
	assert!(text.contains("\"name\": \"Girona–Costa Brava\""));
	assert!(!text.contains("zonas_uas"));
	Ok(())
}

#[test]
fn filter_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
	let input = get_testdata("zones.geojson");
	let (_dir, output) = get_temp_output("zones.geojson");

	geoclip_cmd().args(["filter", input.to_str().unwrap(), output.to_str().unwrap()]).assert().success();
	let first = fs::read(&output)?;

	geoclip_cmd().args(["filter", input.to_str().unwrap(), output.to_str().unwrap()]).assert().success();
	let second = fs::read(&output)?;

	assert_eq!(first, second);
	Ok(())
}

#[test]
fn filter_default_file_names() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	fs::copy(get_testdata("zones.geojson"), dir.path().join("zguas_aero.geojson"))?;

	geoclip_cmd()
		.current_dir(dir.path())
		.arg("filter")
		.assert()
		.success()
		.stdout(str::contains("ZGUAS_Aero_Catalunya_filtrado.geojson"));

	assert_eq!(
		get_identifiers(&dir.path().join("ZGUAS_Aero_Catalunya_filtrado.geojson")).len(),
		4
	);
	Ok(())
}

#[test]
fn filter_feature_instead_of_collection() -> Result<(), Box<dyn std::error::Error>> {
	let (dir, output) = get_temp_output("out.geojson");
	let input = dir.path().join("feature.geojson");
	fs::write(
		&input,
		r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1.5,41.5]}}"#,
	)?;

	geoclip_cmd()
		.args(["filter", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("original number of features: 0"))
		.stdout(str::contains("number of features inside the region: 0"));

	assert_eq!(
		fs::read_to_string(&output)?,
		"{\n  \"type\": \"FeatureCollection\",\n  \"features\": []\n}"
	);
	Ok(())
}

#[test]
fn filter_missing_input() -> Result<(), Box<dyn std::error::Error>> {
	let (dir, output) = get_temp_output("out.geojson");
	let input = dir.path().join("missing.geojson");

	geoclip_cmd()
		.args(["filter", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty())
		.stderr(str::contains("missing.geojson"))
		.stderr(str::contains("was not found"));

	assert!(!output.exists());
	Ok(())
}

#[test]
fn filter_malformed_input() -> Result<(), Box<dyn std::error::Error>> {
	let (dir, output) = get_temp_output("out.geojson");
	let input = dir.path().join("broken.geojson");
	fs::write(&input, "{\"type\": \"FeatureCollection\", \"features\": [}")?;

	geoclip_cmd()
		.args(["filter", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty())
		.stderr(str::contains("is not valid JSON"));

	assert!(!output.exists());
	Ok(())
}

#[test]
fn filter_unwritable_output() -> Result<(), Box<dyn std::error::Error>> {
	let input = get_testdata("zones.geojson");
	let (dir, _) = get_temp_output("unused");
	let output = dir.path().join("no_such_dir").join("out.geojson");

	geoclip_cmd()
		.args(["filter", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("failed to write output file"));
	Ok(())
}

#[test]
fn filter_with_bbox_argument() -> Result<(), Box<dyn std::error::Error>> {
	let input = get_testdata("zones.geojson");
	let (_dir, output) = get_temp_output("mallorca.geojson");

	geoclip_cmd()
		.args([
			"filter",
			input.to_str().unwrap(),
			output.to_str().unwrap(),
			"--bbox",
			"2.3,39.2,3.5,40.0",
		])
		.assert()
		.success()
		.stdout(str::contains("number of features inside the region: 1"));

	assert_eq!(get_identifiers(&output), ["LEPA-CTR"]);
	Ok(())
}
