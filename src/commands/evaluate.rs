use crate::config::EvalConfig;
use crate::error::{Result, SrganError};
use crate::image_io;
use clap::ArgMatches;
use ndarray::{ArrayD, Axis};
use tracing::info;

pub fn evaluate(app_m: &ArgMatches, config: &EvalConfig) -> Result<()> {
	let lr_paths: Vec<&str> = app_m.values_of("LR").map(|v| v.collect()).unwrap_or_default();
	let hr_paths: Vec<&str> = app_m.values_of("HR").map(|v| v.collect()).unwrap_or_default();
	if lr_paths.len() != hr_paths.len() {
		return Err(SrganError::InvalidParameter(format!(
			"Got {} low-res images but {} high-res images",
			lr_paths.len(),
			hr_paths.len()
		)));
	}

	let config = super::config_with_factor(app_m, config)?;
	let model = config.baseline_model()?;
	let limit = config.max_images.unwrap_or(lr_paths.len());

	let pairs = lr_paths
		.iter()
		.zip(hr_paths.iter())
		.take(limit)
		.map(|(lr, hr)| load_pair(lr, hr))
		.collect::<Result<Vec<_>>>()?;

	info!("Evaluating {} on {} pairs", model.inner(), pairs.len());
	let evaluation = crate::resolve::evaluate_detailed(&model, pairs)?;

	for ((lr, _), value) in lr_paths.iter().zip(hr_paths.iter()).zip(evaluation.psnr_values().iter()) {
		println!("{}\t{:.4}", lr, value);
	}
	println!(
		"Mean PSNR: {:.4}\tMin: {:.4}\tMax: {:.4}",
		evaluation.mean(),
		evaluation.min(),
		evaluation.max()
	);

	Ok(())
}

/// Loads one pair as batches of one.
fn load_pair(lr_path: &str, hr_path: &str) -> Result<(ArrayD<f32>, ArrayD<f32>)> {
	let lr = image_io::load_rgb(lr_path)?;
	let hr = image_io::load_rgb(hr_path)?;
	Ok((lr.insert_axis(Axis(0)), hr.insert_axis(Axis(0))))
}
