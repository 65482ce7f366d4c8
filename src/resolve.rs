//! Running a model on low-resolution input and scoring it against high-resolution references.

use ndarray::{ArrayD, ArrayViewD, Axis};
use tracing::{debug, info};

use crate::constants::pixel;
use crate::error::{Result, SrganError};
use crate::logging::OperationLogger;
use crate::model::Model;
use crate::psnr::psnr;

/// Runs `model` on a batch of low-resolution images and converts the prediction to display-ready
/// pixels: clipped to [0, 255], rounded to nearest (ties to even) and cast to `u8`.
pub fn resolve<M: Model + ?Sized>(model: &M, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<u8>> {
	debug!(shape = ?lr_batch.shape(), "Resolving batch");
	let sr_batch = model.predict(lr_batch)?;
	Ok(sr_batch.mapv(to_pixel))
}

/// Resolves a single `[H, W, C]` image by wrapping it in a batch of one.
pub fn resolve_single<M: Model + ?Sized>(model: &M, lr: ArrayViewD<f32>) -> Result<ArrayD<u8>> {
	let sr_batch = resolve(model, lr.insert_axis(Axis(0)))?;
	if sr_batch.ndim() == 0 || sr_batch.shape()[0] == 0 {
		return Err(SrganError::Model(format!(
			"expected a batch of one prediction, got shape {:?}",
			sr_batch.shape()
		)));
	}
	Ok(sr_batch.index_axis_move(Axis(0), 0))
}

fn to_pixel(value: f32) -> u8 {
	// NaN survives clamp and round, then casts to 0
	value.clamp(0.0, pixel::MAX_VALUE).round_ties_even() as u8
}

/// Per-pair PSNR values from one pass over a dataset. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
	psnr_values: Vec<f64>,
}

impl Evaluation {
	/// PSNR of each pair, in dataset order.
	pub fn psnr_values(&self) -> &[f64] {
		&self.psnr_values
	}

	pub fn len(&self) -> usize {
		self.psnr_values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.psnr_values.is_empty()
	}

	/// Arithmetic mean. Infinite if any pair was reproduced exactly.
	pub fn mean(&self) -> f64 {
		self.psnr_values.iter().sum::<f64>() / self.psnr_values.len() as f64
	}

	pub fn min(&self) -> f64 {
		self.psnr_values.iter().copied().fold(f64::INFINITY, f64::min)
	}

	pub fn max(&self) -> f64 {
		self.psnr_values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
	}
}

/// Mean PSNR of `model` over a dataset of `(low-res batch, high-res batch)` pairs.
///
/// Every low-res batch must hold exactly one image.
pub fn evaluate<M, I>(model: &M, ds: I) -> Result<f64>
where
	M: Model + ?Sized,
	I: IntoIterator<Item = (ArrayD<f32>, ArrayD<f32>)>,
{
	Ok(evaluate_detailed(model, ds)?.mean())
}

/// As [`evaluate`], keeping every per-pair score.
pub fn evaluate_detailed<M, I>(model: &M, ds: I) -> Result<Evaluation>
where
	M: Model + ?Sized,
	I: IntoIterator<Item = (ArrayD<f32>, ArrayD<f32>)>,
{
	let operation = OperationLogger::new("evaluate");
	let mut psnr_values = Vec::new();

	for (index, (lr, hr)) in ds.into_iter().enumerate() {
		let score = score_pair(model, index, lr.view(), hr.view()).map_err(|err| {
			operation.log_error(&err);
			err
		})?;
		debug!(pair = index, psnr = score, "Scored pair");
		operation.log_progress(format!("scored {} pairs", index + 1));
		psnr_values.push(score);
	}

	if psnr_values.is_empty() {
		return Err(SrganError::EmptyDataset);
	}

	let evaluation = Evaluation { psnr_values };
	info!(pairs = evaluation.len(), mean_psnr = evaluation.mean(), "Evaluation finished");
	operation.add_metadata("pairs", evaluation.len());
	operation.add_metadata("mean_psnr", evaluation.mean());
	operation.complete();
	Ok(evaluation)
}

fn score_pair<M: Model + ?Sized>(model: &M, index: usize, lr: ArrayViewD<f32>, hr: ArrayViewD<f32>) -> Result<f64> {
	if lr.ndim() != 4 {
		return Err(SrganError::ShapeMismatch(format!(
			"dataset item {} is not an [N, H, W, C] batch: shape {:?}",
			index,
			lr.shape()
		)));
	}
	let size = lr.shape()[0];
	if size != 1 {
		return Err(SrganError::BatchSize { index, size });
	}

	let sr = resolve(model, lr)?;
	let values = psnr(hr, sr.view())?;
	Ok(values[0])
}
