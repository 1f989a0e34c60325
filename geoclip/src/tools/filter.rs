use anyhow::{Context, Result};
use geoclip::{
	config::Config,
	geometry::{GeoBBox, filter::FilterOptions, filter_document},
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON FeatureCollection to read [default: zguas_aero.geojson]
	#[arg()]
	input_file: Option<PathBuf>,

	/// GeoJSON file to write, an existing file is replaced [default: ZGUAS_Aero_Catalunya_filtrado.geojson]
	#[arg()]
	output_file: Option<PathBuf>,

	/// keep only features inside this bounding box [default: 0,40.5,3.3,42.9]
	#[arg(
		long,
		short,
		value_name = "lon_min,lat_min,lon_max,lat_max",
		allow_hyphen_values = true,
		display_order = 1
	)]
	bbox: Option<String>,

	/// read input, output and bbox from a YAML file, command line arguments take precedence
	#[arg(long, short, value_name = "FILE", display_order = 2)]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let options = get_options(arguments)?;

	match filter_document(&options) {
		Ok(summary) => {
			println!("{summary}");
			Ok(())
		}
		Err(error) if error.is_input_error() => {
			eprintln!("Error: {error}");
			Ok(())
		}
		Err(error) => Err(error.into()),
	}
}

fn get_options(arguments: &Subcommand) -> Result<FilterOptions> {
	let config = match &arguments.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	let mut options = config.into_options()?;

	if let Some(input) = &arguments.input_file {
		options.input.clone_from(input);
	}
	if let Some(output) = &arguments.output_file {
		options.output.clone_from(output);
	}
	if let Some(bbox) = &arguments.bbox {
		options.bbox = bbox.parse::<GeoBBox>().context("failed to parse --bbox")?;
	}

	log::debug!("filter options: {options:?}");
	Ok(options)
}
