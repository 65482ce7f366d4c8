use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SrganError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),

	#[error("Image processing error: {0}")]
	Image(#[from] image::ImageError),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("Serialization error: {0}")]
	Serialization(String),

	#[error("Invalid parameter: {0}")]
	InvalidParameter(String),

	#[error("Shape mismatch: {0}")]
	ShapeMismatch(String),

	/// Raised by a `Model` implementation; passed through untouched.
	#[error("Model error: {0}")]
	Model(String),

	#[error("Batch size error: expected a batch of 1 at dataset item {index}, got {size}")]
	BatchSize { index: usize, size: usize },

	#[error("Dataset yielded no (low-res, high-res) pairs")]
	EmptyDataset,

	#[error("File not found: {}", .0.display())]
	FileNotFound(PathBuf),
}

impl From<ndarray::ShapeError> for SrganError {
	fn from(err: ndarray::ShapeError) -> Self {
		SrganError::ShapeMismatch(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, SrganError>;
