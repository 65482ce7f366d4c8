use std::path::Path;

use image::ImageFormat;
use ndarray::{ArrayD, ArrayViewD, IxDyn};

use crate::constants::pixel;
use crate::error::{Result, SrganError};

/// Loads an image file as an RGB tensor of shape [H, W, 3] holding 0-255 values.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<ArrayD<f32>> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(SrganError::FileNotFound(path.to_path_buf()));
	}
	if !path.is_file() {
		return Err(SrganError::InvalidParameter(format!("{} is not a file", path.display())));
	}
	let format = readable_format(path)?;

	let mut reader = image::io::Reader::open(path)?;
	reader.set_format(format);
	let image = reader.decode()?.to_rgb8();
	let (width, height) = image.dimensions();
	let data = image.into_raw().into_iter().map(f32::from).collect();
	Ok(ArrayD::from_shape_vec(
		IxDyn(&[height as usize, width as usize, pixel::CHANNELS]),
		data,
	)?)
}

/// Saves an [H, W, 3] tensor of bytes as an image, format chosen by the file extension.
pub fn save_rgb<P: AsRef<Path>>(image: ArrayViewD<u8>, path: P) -> Result<()> {
	let path = path.as_ref();
	let (height, width) = match *image.shape() {
		[h, w, c] if c == pixel::CHANNELS => (h, w),
		_ => {
			return Err(SrganError::ShapeMismatch(format!(
				"expected an [H, W, 3] image, got shape {:?}",
				image.shape()
			)))
		}
	};
	let format = writable_format(path)?;
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() && !parent.is_dir() {
			return Err(SrganError::FileNotFound(parent.to_path_buf()));
		}
	}

	let raw = image.iter().copied().collect();
	let buffer = image::RgbImage::from_raw(width as u32, height as u32, raw)
		.ok_or_else(|| SrganError::ShapeMismatch("image buffer does not match its dimensions".to_string()))?;
	buffer.save_with_format(path, format)?;
	Ok(())
}

/// The format a path's extension names, if this build can decode it.
pub fn readable_format<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
	enabled_format(path.as_ref(), ImageFormat::reading_enabled)
}

/// The format a path's extension names, if this build can encode it.
pub fn writable_format<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
	enabled_format(path.as_ref(), ImageFormat::writing_enabled)
}

/// Extensions of every format passing `enabled`, e.g. `["png", "jpg", "jpeg", "bmp"]`.
pub fn supported_extensions(enabled: fn(&ImageFormat) -> bool) -> Vec<&'static str> {
	ImageFormat::all()
		.filter(|format| enabled(format))
		.flat_map(|format| format.extensions_str().iter().copied())
		.collect()
}

fn enabled_format(path: &Path, enabled: fn(&ImageFormat) -> bool) -> Result<ImageFormat> {
	match ImageFormat::from_path(path) {
		Ok(format) if enabled(&format) => Ok(format),
		_ => Err(SrganError::InvalidParameter(format!(
			"Unsupported image format for {}. Supported extensions: {}",
			path.display(),
			supported_extensions(enabled).join(", ")
		))),
	}
}
