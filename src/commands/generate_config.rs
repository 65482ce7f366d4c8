use crate::config_file::EvalConfigFile;
use crate::constants::file;
use crate::error::{Result, SrganError};
use clap::ArgMatches;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn generate_config(app_m: &ArgMatches) -> Result<()> {
	let output_path = app_m.value_of("OUTPUT_FILE").unwrap_or(file::DEFAULT_CONFIG_FILE);

	if Path::new(output_path).exists() && !app_m.is_present("FORCE") {
		return Err(SrganError::InvalidParameter(format!(
			"File {} already exists. Use --force to overwrite",
			output_path
		)));
	}

	fs::write(output_path, EvalConfigFile::create_example_toml())?;

	info!("Generated example configuration file: {}", output_path);
	info!("Use it with: srgan-eval --config {} evaluate ...", output_path);
	Ok(())
}
