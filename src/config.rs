use crate::constants::network;
use crate::error::{Result, SrganError};
use crate::model::{NearestNeighbour, Normalized};
use crate::normalize::Normalization;

#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
	pub scale: usize,
	pub normalization: Normalization,
	pub max_images: Option<usize>,
}

impl Default for EvalConfig {
	fn default() -> Self {
		Self {
			scale: network::DEFAULT_FACTOR,
			normalization: Normalization::None,
			max_images: None,
		}
	}
}

impl EvalConfig {
	pub fn builder() -> EvalConfigBuilder {
		EvalConfigBuilder::default()
	}

	pub fn validate(&self) -> Result<()> {
		if self.scale == 0 || self.scale > network::MAX_FACTOR {
			return Err(SrganError::InvalidParameter(format!(
				"Scale {} is out of range. Must be between 1 and {}",
				self.scale,
				network::MAX_FACTOR
			)));
		}
		if self.max_images == Some(0) {
			return Err(SrganError::InvalidParameter("Max images must be greater than 0".into()));
		}
		Ok(())
	}

	/// The nearest-neighbour baseline at this scale, run inside the configured normalization.
	pub fn baseline_model(&self) -> Result<Normalized<NearestNeighbour>> {
		self.validate()?;
		Ok(Normalized::symmetric(NearestNeighbour::new(self.scale)?, self.normalization))
	}
}

#[derive(Default)]
pub struct EvalConfigBuilder {
	scale: Option<usize>,
	normalization: Option<Normalization>,
	max_images: Option<usize>,
}

impl EvalConfigBuilder {
	pub fn scale(mut self, scale: usize) -> Self {
		self.scale = Some(scale);
		self
	}

	pub fn normalization(mut self, normalization: Normalization) -> Self {
		self.normalization = Some(normalization);
		self
	}

	pub fn max_images(mut self, max_images: usize) -> Self {
		self.max_images = Some(max_images);
		self
	}

	pub fn build(self) -> EvalConfig {
		EvalConfig {
			scale: self.scale.unwrap_or(network::DEFAULT_FACTOR),
			normalization: self.normalization.unwrap_or_default(),
			max_images: self.max_images,
		}
	}
}
