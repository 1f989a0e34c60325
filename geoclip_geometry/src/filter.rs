//! Clipping a GeoJSON file to a bounding box.
//!
//! [`filter_document`] loads the whole input document, keeps the features whose
//! sampled position lies inside the bounding box and writes them as a new
//! `FeatureCollection`. The output is serialized completely before the output
//! file is touched, so a failing run never leaves a partial file behind.

use crate::{GeoBBox, GeoCollection, parse_geojson};
use std::{
	fmt::Display,
	fs, io,
	path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "zguas_aero.geojson";
pub const DEFAULT_OUTPUT: &str = "ZGUAS_Aero_Catalunya_filtrado.geojson";

#[derive(Debug, Error)]
pub enum FilterError {
	#[error("input file {path:?} was not found")]
	InputNotFound { path: PathBuf },

	#[error("input file {path:?} is not valid JSON: {source}")]
	InputMalformed {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to read input file {path:?}: {source}")]
	ReadInput {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to serialize the filtered features: {0}")]
	Serialize(#[source] serde_json::Error),

	#[error("failed to write output file {path:?}: {source}")]
	WriteOutput {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl FilterError {
	/// `true` for the failures caused by the input document itself: a missing
	/// file or content that is not JSON.
	pub fn is_input_error(&self) -> bool {
		matches!(self, FilterError::InputNotFound { .. } | FilterError::InputMalformed { .. })
	}
}

/// Where to read from, where to write to and which region to keep.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOptions {
	pub input: PathBuf,
	pub output: PathBuf,
	pub bbox: GeoBBox,
}

impl FilterOptions {
	pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
		FilterOptions {
			input: input.into(),
			output: output.into(),
			bbox: GeoBBox::CATALONIA,
		}
	}

	#[must_use]
	pub fn with_bbox(mut self, bbox: GeoBBox) -> Self {
		self.bbox = bbox;
		self
	}
}

impl Default for FilterOptions {
	fn default() -> Self {
		FilterOptions::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
	}
}

/// Outcome of a successful [`filter_document`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSummary {
	pub input: PathBuf,
	pub output: PathBuf,
	pub original_count: usize,
	pub retained_count: usize,
}

impl Display for FilterSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "processed input file: '{}'", self.input.display())?;
		writeln!(f, "original number of features: {}", self.original_count)?;
		writeln!(f, "number of features inside the region: {}", self.retained_count)?;
		write!(f, "filtered file saved as: '{}'", self.output.display())
	}
}

/// Reads `options.input`, keeps the features inside `options.bbox` and writes
/// them to `options.output`, replacing any existing file.
pub fn filter_document(options: &FilterOptions) -> Result<FilterSummary, FilterError> {
	log::info!("filtering {} with bbox {}", options.input.display(), options.bbox.as_string_list());

	let collection = load_collection(&options.input)?;
	let original_count = collection.len();

	let filtered = collection.filtered(&options.bbox);
	let retained_count = filtered.len();
	log::info!("kept {retained_count} of {original_count} features");

	let text = filtered.to_pretty_string().map_err(FilterError::Serialize)?;
	fs::write(&options.output, text).map_err(|source| FilterError::WriteOutput {
		path: options.output.clone(),
		source,
	})?;

	Ok(FilterSummary {
		input: options.input.clone(),
		output: options.output.clone(),
		original_count,
		retained_count,
	})
}

fn load_collection(path: &Path) -> Result<GeoCollection, FilterError> {
	let text = fs::read_to_string(path).map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => FilterError::InputNotFound {
			path: path.to_path_buf(),
		},
		_ => FilterError::ReadInput {
			path: path.to_path_buf(),
			source,
		},
	})?;

	parse_geojson(&text).map_err(|source| FilterError::InputMalformed {
		path: path.to_path_buf(),
		source,
	})
}
