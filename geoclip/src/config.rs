//! Configuration file for the `filter` command.
//!
//! ```yaml
//! input: zguas_aero.geojson
//! output: ZGUAS_Aero_Catalunya_filtrado.geojson
//! bbox: [0.0, 40.5, 3.3, 42.9]
//! ```
//!
//! Every field is optional. Missing fields fall back to the built-in defaults.

use anyhow::{Context, Result};
use geoclip_geometry::{GeoBBox, filter::FilterOptions};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// GeoJSON file to read
	#[serde(default)]
	pub input: Option<PathBuf>,

	/// GeoJSON file to write, replaced if it exists
	#[serde(default)]
	pub output: Option<PathBuf>,

	/// Region to keep as `[lon_min, lat_min, lon_max, lat_max]`
	#[serde(default)]
	pub bbox: Option<Vec<f64>>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parses a file and resolves relative `input` and `output` paths against
	/// the directory of that file.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		let mut cfg =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))?;

		if let Some(base) = path.parent() {
			cfg.resolve_paths(base);
		}
		Ok(cfg)
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		for path in [&mut self.input, &mut self.output].into_iter().flatten() {
			if path.is_relative() {
				*path = base.join(&*path);
			}
		}
	}

	/// Builds the filter options, using the defaults for everything not set.
	pub fn into_options(self) -> Result<FilterOptions> {
		let mut options = FilterOptions::default();
		if let Some(input) = self.input {
			options.input = input;
		}
		if let Some(output) = self.output {
			options.output = output;
		}
		if let Some(bbox) = self.bbox {
			options.bbox = GeoBBox::try_from(bbox).context("invalid bbox in config")?;
		}
		Ok(options)
	}
}
