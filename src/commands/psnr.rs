use crate::error::{Result, SrganError};
use crate::image_io;
use clap::ArgMatches;

pub fn psnr(app_m: &ArgMatches) -> Result<()> {
	let image1_path = app_m
		.value_of("IMAGE1")
		.ok_or_else(|| SrganError::InvalidParameter("No IMAGE1 file given".to_string()))?;
	let image2_path = app_m
		.value_of("IMAGE2")
		.ok_or_else(|| SrganError::InvalidParameter("No IMAGE2 file given".to_string()))?;

	let image1 = image_io::load_rgb(image1_path)?;
	let image2 = image_io::load_rgb(image2_path)?;

	let rgb = crate::psnr::psnr(image1.view(), image2.view())?;
	let luma = crate::psnr::psnr_luma(image1.view(), image2.view())?;

	println!("sRGB PSNR: {}\tLuma PSNR: {}", rgb[0], luma[0]);

	Ok(())
}
