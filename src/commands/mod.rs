pub mod evaluate;
pub mod generate_config;
pub mod psnr;
pub mod resolve;

pub use self::evaluate::evaluate;
pub use self::generate_config::generate_config;
pub use self::psnr::psnr;
pub use self::resolve::resolve;

use crate::config::EvalConfig;
use crate::config_file::EvalConfigFile;
use crate::error::{Result, SrganError};
use clap::ArgMatches;

/// Runs the parsed subcommand. Only `resolve` and `evaluate` read the model settings.
pub fn run(app_m: &ArgMatches, config_file: &EvalConfigFile) -> Result<()> {
	match app_m.subcommand() {
		("psnr", Some(sub_m)) => psnr(sub_m),
		("resolve", Some(sub_m)) => resolve(sub_m, &config_file.to_eval_config()?),
		("evaluate", Some(sub_m)) => evaluate(sub_m, &config_file.to_eval_config()?),
		("generate-config", Some(sub_m)) => generate_config(sub_m),
		(name, _) => Err(SrganError::InvalidParameter(format!("Unknown subcommand: {:?}", name))),
	}
}

/// The config with the `--factor` override applied.
fn config_with_factor(app_m: &ArgMatches, config: &EvalConfig) -> Result<EvalConfig> {
	let mut config = config.clone();
	if let Some(factor) = app_m.value_of("FACTOR") {
		config.scale = factor
			.parse()
			.map_err(|_| SrganError::Parse(format!("FACTOR must be a positive integer, got {}", factor)))?;
	}
	config.validate()?;
	Ok(config)
}
