extern crate srgan_common;

use srgan_common::config_file::EvalConfigFile;
use srgan_common::error::{Result, SrganError};
use srgan_common::{cli, commands, logging};
use std::path::{Path, PathBuf};
use tracing::error;

fn main() {
	let app_m = cli::build_cli();

	let config_file = match load_config_file(app_m.value_of("CONFIG")) {
		Ok(config_file) => config_file,
		Err(err) => {
			eprintln!("Error: {}", err);
			std::process::exit(1);
		},
	};

	let _log_guard = match config_file.to_log_config().map(logging::init_logging) {
		Ok(Ok(guard)) => guard,
		Ok(Err(err)) => {
			eprintln!("Error: failed to initialise logging: {}", err);
			std::process::exit(1);
		},
		Err(err) => {
			eprintln!("Error: {}", err);
			std::process::exit(1);
		},
	};

	if let Err(err) = commands::run(&app_m, &config_file) {
		error!("Error: {}", err);
		std::process::exit(1);
	}
}

fn load_config_file(path: Option<&str>) -> Result<EvalConfigFile> {
	match path {
		Some(path) if !Path::new(path).is_file() => Err(SrganError::FileNotFound(PathBuf::from(path))),
		Some(path) => EvalConfigFile::from_file(path),
		None => Ok(EvalConfigFile::default()),
	}
}
