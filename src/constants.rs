pub mod pixel {
	pub const MAX_VALUE: f32 = 255.0;
	pub const HALF_RANGE: f32 = 127.5;
	pub const CHANNELS: usize = 3;
}

pub mod div2k {
	/// Per-channel mean of the DIV2K training set, on the 0-255 scale.
	pub const RGB_MEAN: [f32; 3] = [0.4488 * 255.0, 0.4371 * 255.0, 0.4040 * 255.0];
}

pub mod network {
	pub const DEFAULT_FACTOR: usize = 4;
	pub const MAX_FACTOR: usize = 8;
}

pub mod psnr {
	pub const LOG10_MULTIPLIER: f64 = 10.0;
	pub const MAX_VALUE: f64 = 255.0;
	// BT.601
	pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];
}

pub mod file {
	pub const LOG_FILE_NAME: &str = "srgan-eval.log";
	pub const DEFAULT_CONFIG_FILE: &str = "eval_config.toml";
}
