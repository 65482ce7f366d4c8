//! Pixel intensity rescaling between the 0-255 range and the ranges models are trained on.
//!
//! Every pair here is an exact inverse up to floating point rounding. The mean-centred pair only
//! round-trips when both calls are given the same mean.

use ndarray::{ArrayD, ArrayViewD, Axis};

use crate::constants::{div2k, pixel};
use crate::error::{Result, SrganError};

/// `(x - mean) / 127.5`, with `mean` broadcast along the last (channel) axis.
pub fn normalize(x: ArrayViewD<f32>, mean: &[f32]) -> Result<ArrayD<f32>> {
	map_channels(x, mean, |v, m| (v - m) / pixel::HALF_RANGE)
}

/// `x * 127.5 + mean`, the inverse of [`normalize`].
pub fn denormalize(x: ArrayViewD<f32>, mean: &[f32]) -> Result<ArrayD<f32>> {
	map_channels(x, mean, |v, m| v * pixel::HALF_RANGE + m)
}

pub fn normalize_div2k(x: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
	normalize(x, &div2k::RGB_MEAN)
}

pub fn denormalize_div2k(x: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
	denormalize(x, &div2k::RGB_MEAN)
}

/// Maps 0-255 to [0, 1].
pub fn normalize_01(x: ArrayViewD<f32>) -> ArrayD<f32> {
	x.mapv(|v| v / pixel::MAX_VALUE)
}

/// Inverts [`normalize_01`].
pub fn denormalize_01(x: ArrayViewD<f32>) -> ArrayD<f32> {
	x.mapv(|v| v * pixel::MAX_VALUE)
}

/// Maps 0-255 to [-1, 1].
pub fn normalize_m11(x: ArrayViewD<f32>) -> ArrayD<f32> {
	x.mapv(|v| v / pixel::HALF_RANGE - 1.0)
}

/// Inverts [`normalize_m11`].
pub fn denormalize_m11(x: ArrayViewD<f32>) -> ArrayD<f32> {
	x.mapv(|v| (v + 1.0) * pixel::HALF_RANGE)
}

fn map_channels<F>(x: ArrayViewD<f32>, mean: &[f32], f: F) -> Result<ArrayD<f32>>
where
	F: Fn(f32, f32) -> f32,
{
	let channels = x.shape().last().copied().ok_or_else(|| {
		SrganError::ShapeMismatch("cannot broadcast a channel mean over a 0-d array".to_string())
	})?;
	if channels != mean.len() {
		return Err(SrganError::ShapeMismatch(format!(
			"mean has {} values but the channel axis has length {}",
			mean.len(),
			channels
		)));
	}

	let last = Axis(x.ndim() - 1);
	let mut out = x.to_owned();
	for mut lane in out.lanes_mut(last) {
		for (v, &m) in lane.iter_mut().zip(mean) {
			*v = f(*v, m);
		}
	}
	Ok(out)
}

/// A normalization scheme, applied on the way into a model and inverted on the way out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Normalization {
	#[default]
	None,
	Mean([f32; 3]),
	ZeroOne,
	MinusOneOne,
}

impl Normalization {
	pub fn div2k() -> Self {
		Normalization::Mean(div2k::RGB_MEAN)
	}

	/// Accepts: none, mean, zero_one, minus_one_one. `mean` uses `rgb_mean` or the DIV2K mean.
	pub fn from_label(label: &str, rgb_mean: Option<[f32; 3]>) -> Result<Self> {
		match label {
			"none" => Ok(Normalization::None),
			"mean" => Ok(Normalization::Mean(rgb_mean.unwrap_or(div2k::RGB_MEAN))),
			"zero_one" => Ok(Normalization::ZeroOne),
			"minus_one_one" => Ok(Normalization::MinusOneOne),
			_ => Err(SrganError::InvalidParameter(format!(
				"Unknown normalization: {}. Use none, mean, zero_one or minus_one_one",
				label
			))),
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Normalization::None => "none",
			Normalization::Mean(_) => "mean",
			Normalization::ZeroOne => "zero_one",
			Normalization::MinusOneOne => "minus_one_one",
		}
	}

	pub fn apply(&self, x: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		match self {
			Normalization::None => Ok(x.to_owned()),
			Normalization::Mean(mean) => normalize(x, mean),
			Normalization::ZeroOne => Ok(normalize_01(x)),
			Normalization::MinusOneOne => Ok(normalize_m11(x)),
		}
	}

	pub fn invert(&self, x: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		match self {
			Normalization::None => Ok(x.to_owned()),
			Normalization::Mean(mean) => denormalize(x, mean),
			Normalization::ZeroOne => Ok(denormalize_01(x)),
			Normalization::MinusOneOne => Ok(denormalize_m11(x)),
		}
	}
}
