//! Sub-pixel convolution (Shi et al. 2016, arXiv:1609.05158): the depth-to-space rearrangement
//! that turns `scale²` blocks of channel depth into a `scale × scale` spatial neighbourhood.

use ndarray::{Array4, ArrayD, ArrayViewD, Ix4};

use crate::error::{Result, SrganError};

/// Depth-to-space for NHWC tensors with a fixed upscaling factor.
///
/// `out[b, h*s + i, w*s + j, c] = in[b, h, w, (i*s + j)*C + c]` where `C = in_channels / s²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubpixelConv2d {
	scale: usize,
}

impl SubpixelConv2d {
	pub fn new(scale: usize) -> Result<Self> {
		if scale == 0 {
			return Err(SrganError::InvalidParameter("Scale must be greater than 0".into()));
		}
		Ok(SubpixelConv2d { scale })
	}

	pub fn scale(&self) -> usize {
		self.scale
	}

	/// Output shape for an input of shape `[N, H, W, C*s²]`.
	pub fn output_shape(&self, input_shape: &[usize]) -> Result<[usize; 4]> {
		let (n, h, w, c) = match *input_shape {
			[n, h, w, c] => (n, h, w, c),
			_ => {
				return Err(SrganError::ShapeMismatch(format!(
					"depth-to-space expects a 4-D [N, H, W, C] tensor, got shape {:?}",
					input_shape
				)))
			}
		};
		let block = self.scale * self.scale;
		if c % block != 0 {
			return Err(SrganError::ShapeMismatch(format!(
				"channel depth {} is not divisible by scale² = {}",
				c, block
			)));
		}
		Ok([n, h * self.scale, w * self.scale, c / block])
	}

	pub fn apply<A: Clone>(&self, x: ArrayViewD<A>) -> Result<ArrayD<A>> {
		let [n, out_h, out_w, out_c] = self.output_shape(x.shape())?;
		let x = x.into_dimensionality::<Ix4>()?;
		let s = self.scale;

		let out = Array4::from_shape_fn((n, out_h, out_w, out_c), |(b, y, w, c)| {
			let depth = ((y % s) * s + w % s) * out_c + c;
			x[[b, y / s, w / s, depth]].clone()
		});
		Ok(out.into_dyn())
	}
}

/// Returns the rearrangement as a closure over `scale`.
pub fn subpixel_conv2d(scale: usize) -> Result<impl Fn(ArrayViewD<f32>) -> Result<ArrayD<f32>>> {
	let layer = SubpixelConv2d::new(scale)?;
	Ok(move |x: ArrayViewD<f32>| layer.apply(x))
}
