use ndarray::{Array1, ArrayViewD, Axis};

use crate::constants::psnr as psnr_constants;
use crate::error::{Result, SrganError};

/// Takes two equally shaped tensors of shape [H, W, C] or [N, H, W, C] holding 0-255 values and
/// returns the PSNR of each image in the batch, using a peak value of 255.
///
/// Identical images have zero error and yield `f64::INFINITY`.
pub fn psnr<A, B>(x1: ArrayViewD<A>, x2: ArrayViewD<B>) -> Result<Array1<f64>>
where
	A: Copy + Into<f64>,
	B: Copy + Into<f64>,
{
	Ok(mse(x1, x2)?.mapv(psnr_from_mse))
}

/// As [`psnr`], but compares BT.601 luma instead of the RGB channels. Requires 3 channels.
pub fn psnr_luma<A, B>(x1: ArrayViewD<A>, x2: ArrayViewD<B>) -> Result<Array1<f64>>
where
	A: Copy + Into<f64>,
	B: Copy + Into<f64>,
{
	let (x1, x2) = as_batches(x1, x2)?;
	let channels = x1.shape()[3];
	if channels != psnr_constants::LUMA_WEIGHTS.len() {
		return Err(SrganError::ShapeMismatch(format!(
			"luma PSNR needs 3 channels, got {}",
			channels
		)));
	}

	let errors = x1
		.outer_iter()
		.zip(x2.outer_iter())
		.map(|(a, b)| {
			let mut err = 0.0;
			let mut count = 0usize;
			for (pa, pb) in a.lanes(Axis(2)).into_iter().zip(b.lanes(Axis(2))) {
				let diff = luma(pa.iter().copied()) - luma(pb.iter().copied());
				err += diff * diff;
				count += 1;
			}
			err / count as f64
		})
		.collect::<Array1<f64>>();

	Ok(errors.mapv(psnr_from_mse))
}

/// Mean squared error of each image in the batch, over every pixel and channel.
pub fn mse<A, B>(x1: ArrayViewD<A>, x2: ArrayViewD<B>) -> Result<Array1<f64>>
where
	A: Copy + Into<f64>,
	B: Copy + Into<f64>,
{
	let (x1, x2) = as_batches(x1, x2)?;

	Ok(x1
		.outer_iter()
		.zip(x2.outer_iter())
		.map(|(a, b)| {
			let sum: f64 = a
				.iter()
				.zip(b.iter())
				.map(|(&p, &q)| {
					let diff = p.into() - q.into();
					diff * diff
				})
				.sum();
			sum / a.len() as f64
		})
		.collect())
}

fn psnr_from_mse(mse: f64) -> f64 {
	if mse == 0.0 {
		return f64::INFINITY;
	}
	psnr_constants::LOG10_MULTIPLIER * (psnr_constants::MAX_VALUE * psnr_constants::MAX_VALUE / mse).log10()
}

fn luma<A: Into<f64>>(pixel: impl Iterator<Item = A>) -> f64 {
	pixel
		.zip(psnr_constants::LUMA_WEIGHTS.iter())
		.map(|(v, w)| v.into() * w)
		.sum()
}

/// Checks the shapes agree and lifts single images to a batch of one.
fn as_batches<'a, 'b, A, B>(
	x1: ArrayViewD<'a, A>,
	x2: ArrayViewD<'b, B>,
) -> Result<(ArrayViewD<'a, A>, ArrayViewD<'b, B>)> {
	if x1.shape() != x2.shape() {
		return Err(SrganError::ShapeMismatch(format!(
			"PSNR needs equally shaped images, got {:?} and {:?}",
			x1.shape(),
			x2.shape()
		)));
	}

	let (x1, x2) = match x1.ndim() {
		3 => (x1.insert_axis(Axis(0)), x2.insert_axis(Axis(0))),
		4 => (x1, x2),
		n => {
			return Err(SrganError::ShapeMismatch(format!(
				"PSNR expects [H, W, C] or [N, H, W, C] images, got {} dimensions",
				n
			)))
		}
	};

	if x1.shape()[1..].iter().any(|&d| d == 0) {
		return Err(SrganError::ShapeMismatch("PSNR of an empty image is undefined".to_string()));
	}
	Ok((x1, x2))
}
