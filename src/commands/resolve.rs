use crate::config::EvalConfig;
use crate::error::{Result, SrganError};
use crate::image_io;
use clap::ArgMatches;
use tracing::info;

pub fn resolve(app_m: &ArgMatches, config: &EvalConfig) -> Result<()> {
	let input_path = app_m
		.value_of("INPUT_FILE")
		.ok_or_else(|| SrganError::InvalidParameter("No input file given".to_string()))?;
	let output_path = app_m
		.value_of("OUTPUT_FILE")
		.ok_or_else(|| SrganError::InvalidParameter("No output file given".to_string()))?;

	// output format is checked before any work is done
	image_io::writable_format(output_path)?;
	let config = super::config_with_factor(app_m, config)?;
	let model = config.baseline_model()?;

	info!("Resolving {} with {}", input_path, model.inner());
	let lr = image_io::load_rgb(input_path)?;
	let sr = crate::resolve::resolve_single(&model, lr.view())?;
	image_io::save_rgb(sr.view(), output_path)?;

	info!(shape = ?sr.shape(), "Output saved to: {}", output_path);
	Ok(())
}
