use std::fmt;

use ndarray::{Array4, ArrayD, ArrayViewD, Ix4};

use crate::error::Result;
use crate::normalize::Normalization;
use crate::subpixel::SubpixelConv2d;

/// A trained super-resolution model, treated as opaque.
///
/// `predict` maps a batch of low-resolution images `[N, H, W, C]` to a batch of predicted
/// high-resolution images. Values may be out of range or non-integral; callers clean them up.
pub trait Model {
	fn predict(&self, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<f32>>;
}

impl<'m, M: Model + ?Sized> Model for &'m M {
	fn predict(&self, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		(**self).predict(lr_batch)
	}
}

impl<M: Model + ?Sized> Model for Box<M> {
	fn predict(&self, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		(**self).predict(lr_batch)
	}
}

/// Adapts a closure into a [`Model`]. See [`model_fn`].
#[derive(Clone)]
pub struct FnModel<F> {
	f: F,
}

/// Wraps a prediction closure as a [`Model`].
pub fn model_fn<F>(f: F) -> FnModel<F>
where
	F: Fn(ArrayViewD<f32>) -> Result<ArrayD<f32>>,
{
	FnModel { f }
}

impl<F> Model for FnModel<F>
where
	F: Fn(ArrayViewD<f32>) -> Result<ArrayD<f32>>,
{
	fn predict(&self, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		(self.f)(lr_batch)
	}
}

/// Nearest-neighbour upscaling, the baseline every trained model should beat.
///
/// Each pixel's channels are tiled `scale²` times and rearranged with [`SubpixelConv2d`].
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighbour {
	layer: SubpixelConv2d,
}

impl NearestNeighbour {
	pub fn new(scale: usize) -> Result<Self> {
		Ok(NearestNeighbour {
			layer: SubpixelConv2d::new(scale)?,
		})
	}
}

impl Model for NearestNeighbour {
	fn predict(&self, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		let lr = lr_batch.into_dimensionality::<Ix4>()?;
		let (n, h, w, c) = lr.dim();
		let block = self.layer.scale() * self.layer.scale();

		let tiled = Array4::from_shape_fn((n, h, w, c * block), |(b, y, x, k)| lr[[b, y, x, k % c]]);
		self.layer.apply(tiled.into_dyn().view())
	}
}

impl fmt::Display for NearestNeighbour {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "nearest-neighbour x{}", self.layer.scale())
	}
}

/// Runs `inner` in a normalized domain: inputs pass through `input.apply`, predictions through
/// `output.invert`.
#[derive(Debug, Clone)]
pub struct Normalized<M> {
	inner: M,
	input: Normalization,
	output: Normalization,
}

impl<M: Model> Normalized<M> {
	pub fn new(inner: M, input: Normalization, output: Normalization) -> Self {
		Normalized { inner, input, output }
	}

	pub fn symmetric(inner: M, scheme: Normalization) -> Self {
		Self::new(inner, scheme, scheme)
	}

	pub fn inner(&self) -> &M {
		&self.inner
	}
}

impl<M: Model> Model for Normalized<M> {
	fn predict(&self, lr_batch: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
		let normalized = self.input.apply(lr_batch)?;
		let prediction = self.inner.predict(normalized.view())?;
		self.output.invert(prediction.view())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SrganError;
	use ndarray::{Array, IxDyn};

	#[test]
	fn test_nearest_neighbour_repeats_pixels() {
		let lr = Array::from_shape_vec(IxDyn(&[1, 1, 2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
		let sr = NearestNeighbour::new(2).unwrap().predict(lr.view()).unwrap();
		assert_eq!(sr.shape(), &[1, 2, 4, 3]);
		for y in 0..2 {
			assert_eq!(sr[[0, y, 0, 0]], 1.0);
			assert_eq!(sr[[0, y, 1, 2]], 3.0);
			assert_eq!(sr[[0, y, 2, 0]], 4.0);
			assert_eq!(sr[[0, y, 3, 1]], 5.0);
		}
	}

	#[test]
	fn test_nearest_neighbour_needs_batch() {
		let lr = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 3]));
		let err = NearestNeighbour::new(2).unwrap().predict(lr.view()).unwrap_err();
		assert!(matches!(err, SrganError::ShapeMismatch(_)));
	}

	#[test]
	fn test_normalized_wraps_inner_model() {
		// the inner model sees [-1, 1] values and halves them
		let inner = model_fn(|x| {
			assert!(x.iter().all(|v| (-1.0f32..=1.0).contains(v)));
			Ok(x.mapv(|v| v * 0.5))
		});
		let model = Normalized::symmetric(inner, Normalization::MinusOneOne);
		let lr = ArrayD::<f32>::from_elem(IxDyn(&[1, 1, 1, 3]), 255.0);
		let sr = model.predict(lr.view()).unwrap();
		assert!(sr.iter().all(|&v| (v - 191.25).abs() < 1e-4));
	}

	#[test]
	fn test_model_errors_pass_through() {
		let model = model_fn(|_| Err(SrganError::Model("bad input".into())));
		let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 1, 1, 3]));
		let boxed: Box<dyn Model> = Box::new(model);
		assert!(matches!(boxed.predict(lr.view()), Err(SrganError::Model(_))));
	}
}
