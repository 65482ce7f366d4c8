use srgan_common::config::EvalConfig;
use srgan_common::config_file::EvalConfigFile;
use srgan_common::{Model, Normalization, DIV2K_RGB_MEAN};
use ndarray::{ArrayD, IxDyn};
use tempfile::TempDir;

#[test]
fn test_eval_config_default() {
	let config = EvalConfig::default();
	assert_eq!(config.scale, 4);
	assert_eq!(config.normalization, Normalization::None);
	assert_eq!(config.max_images, None);
	assert!(config.validate().is_ok());
}

#[test]
fn test_eval_config_validate_zero_scale() {
	let config = EvalConfig::builder().scale(0).build();
	let result = config.validate();
	assert!(result.is_err());
	assert!(format!("{}", result.unwrap_err()).contains("Scale 0 is out of range"));
}

#[test]
fn test_eval_config_validate_zero_max_images() {
	let config = EvalConfig::builder().max_images(0).build();
	assert!(config.validate().is_err());
}

#[test]
fn test_eval_config_builder() {
	let config = EvalConfig::builder()
		.scale(2)
		.normalization(Normalization::div2k())
		.max_images(5)
		.build();
	assert_eq!(config.scale, 2);
	assert_eq!(config.normalization, Normalization::Mean(DIV2K_RGB_MEAN));
	assert_eq!(config.max_images, Some(5));
}

#[test]
fn test_baseline_model_upscales_by_scale() {
	let config = EvalConfig::builder().scale(3).normalization(Normalization::MinusOneOne).build();
	let model = config.baseline_model().unwrap();
	let lr = ArrayD::<f32>::from_elem(IxDyn(&[1, 2, 2, 3]), 64.0);

	let sr = model.predict(lr.view()).unwrap();

	assert_eq!(sr.shape(), &[1, 6, 6, 3]);
	assert!(sr.iter().all(|&v| (v - 64.0).abs() < 1e-3));
}

#[test]
fn test_config_file_drives_eval_config() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("eval.toml");
	std::fs::write(
		&path,
		"[model]\nfactor = 2\nnormalization = \"mean\"\nrgb_mean = [10.0, 20.0, 30.0]\n\n[evaluation]\nmax_images = 3\n",
	)
	.unwrap();

	let config = EvalConfigFile::from_file(&path).unwrap().to_eval_config().unwrap();

	assert_eq!(config.scale, 2);
	assert_eq!(config.normalization, Normalization::Mean([10.0, 20.0, 30.0]));
	assert_eq!(config.max_images, Some(3));
}

#[test]
fn test_config_file_rejects_unknown_normalization() {
	let mut config_file = EvalConfigFile::default();
	config_file.model.normalization = "L2".to_string();
	assert!(config_file.to_eval_config().is_err());
}

#[test]
fn test_config_file_invalid_toml() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("broken.toml");
	std::fs::write(&path, "[model\nfactor = ").unwrap();
	assert!(EvalConfigFile::from_file(&path).is_err());
}
