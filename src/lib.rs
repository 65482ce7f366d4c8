//! Helpers around a super-resolution model: pixel normalization, PSNR, the sub-pixel
//! (depth-to-space) rearrangement, and resolving/evaluating images with an opaque [`Model`].

#[macro_use]
extern crate serde_derive;

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_file;
pub mod constants;
pub mod error;
pub mod image_io;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod psnr;
pub mod resolve;
pub mod subpixel;

pub use crate::constants::div2k::RGB_MEAN as DIV2K_RGB_MEAN;
pub use crate::error::{Result, SrganError};
pub use crate::model::{model_fn, Model, NearestNeighbour, Normalized};
pub use crate::normalize::{
	denormalize, denormalize_01, denormalize_div2k, denormalize_m11, normalize, normalize_01, normalize_div2k,
	normalize_m11, Normalization,
};
pub use crate::psnr::{psnr, psnr_luma};
pub use crate::resolve::{evaluate, evaluate_detailed, resolve, resolve_single, Evaluation};
pub use crate::subpixel::{subpixel_conv2d, SubpixelConv2d};
