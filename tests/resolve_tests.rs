use ndarray::{Array, Array4, ArrayD, ArrayViewD, Axis, IxDyn};
use srgan_common::{
	evaluate, evaluate_detailed, model_fn, resolve, resolve_single, Model, NearestNeighbour, SrganError,
};

fn identity(lr: ArrayViewD<f32>) -> srgan_common::Result<ArrayD<f32>> {
	Ok(lr.to_owned())
}

#[test]
fn test_resolve_clips_rounds_and_casts() {
	let raw = vec![-10.0, 300.0, 127.6, 127.4, 0.2, 254.9];
	let model = model_fn(move |_| Ok(Array::from_shape_vec(IxDyn(&[1, 1, 2, 3]), raw.clone()).unwrap()));
	let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 1, 1, 3]));

	let sr: ArrayD<u8> = resolve(&model, lr.view()).unwrap();

	assert_eq!(sr.shape(), &[1, 1, 2, 3]);
	assert_eq!(sr.iter().copied().collect::<Vec<u8>>(), vec![0, 255, 128, 127, 0, 255]);
}

#[test]
fn test_resolve_rounds_half_to_even() {
	let model = model_fn(|_| Ok(Array::from_shape_vec(IxDyn(&[1, 1, 1, 3]), vec![0.5f32, 2.5, 254.5]).unwrap()));
	let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 1, 1, 3]));

	let sr = resolve(&model, lr.view()).unwrap();

	assert_eq!(sr.iter().copied().collect::<Vec<u8>>(), vec![0, 2, 254]);
}

#[test]
fn test_resolve_single_rejects_empty_prediction_batch() {
	let model = model_fn(|_| Ok(ArrayD::<f32>::zeros(IxDyn(&[0, 2, 2, 3]))));
	let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 1, 3]));

	match resolve_single(&model, lr.view()) {
		Err(SrganError::Model(msg)) => assert!(msg.contains("[0, 2, 2, 3]"), "{}", msg),
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn test_resolve_single_rejects_scalar_prediction() {
	let model = model_fn(|_| Ok(ArrayD::<f32>::zeros(IxDyn(&[]))));
	let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 1, 3]));
	assert!(matches!(resolve_single(&model, lr.view()), Err(SrganError::Model(_))));
}

#[test]
fn test_resolve_single_clips_constant_prediction() {
	let model = model_fn(|lr| {
		let (n, h, w, c) = lr.into_dimensionality::<ndarray::Ix4>()?.dim();
		Ok(Array4::from_elem((n, h * 2, w * 2, c), 260.0f32).into_dyn())
	});
	let lr = ArrayD::<f32>::from_elem(IxDyn(&[3, 5, 3]), 40.0);

	let sr = resolve_single(&model, lr.view()).unwrap();

	assert_eq!(sr.shape(), &[6, 10, 3]);
	assert!(sr.iter().all(|&v| v == 255));
}

#[test]
fn test_resolve_single_matches_batched_resolve() {
	let model = NearestNeighbour::new(3).unwrap();
	let lr = Array::from_shape_fn(IxDyn(&[2, 2, 3]), |idx| (idx[0] * 60 + idx[1] * 20 + idx[2]) as f32 + 0.4);

	let single = resolve_single(&model, lr.view()).unwrap();
	let batched = resolve(&model, lr.view().insert_axis(Axis(0))).unwrap();

	assert_eq!(single, batched.index_axis(Axis(0), 0));
	assert_eq!(single[[5, 5, 2]], 82);
}

#[test]
fn test_resolve_passes_model_errors_through() {
	let model = model_fn(|_| Err(SrganError::Model("input shape rejected".to_string())));
	let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 4, 4, 3]));
	match resolve(&model, lr.view()) {
		Err(SrganError::Model(msg)) => assert_eq!(msg, "input shape rejected"),
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn test_evaluate_identity_on_identical_pair_is_infinite() {
	let image = Array::from_shape_fn(IxDyn(&[1, 4, 4, 3]), |idx| (idx[1] * 50 + idx[2] * 10 + idx[3]) as f32);
	let model = model_fn(identity);

	let mean = evaluate(&model, vec![(image.clone(), image)]).unwrap();

	assert_eq!(mean, f64::INFINITY);
}

#[test]
fn test_evaluate_averages_pairs() {
	let model = model_fn(identity);
	let lr = ArrayD::<f32>::zeros(IxDyn(&[1, 2, 2, 3]));
	let hr_20db = ArrayD::<f32>::from_elem(IxDyn(&[1, 2, 2, 3]), 25.5);
	let hr_0db = ArrayD::<f32>::from_elem(IxDyn(&[1, 2, 2, 3]), 255.0);

	let evaluation = evaluate_detailed(&model, vec![(lr.clone(), hr_20db), (lr, hr_0db)]).unwrap();

	assert_eq!(evaluation.len(), 2);
	assert!((evaluation.psnr_values()[0] - 20.0).abs() < 1e-9);
	assert!(evaluation.psnr_values()[1].abs() < 1e-9);
	assert!((evaluation.mean() - 10.0).abs() < 1e-9);
}

#[test]
fn test_evaluate_consumes_lazy_dataset_in_order() {
	let model = NearestNeighbour::new(2).unwrap();
	let ds = (0..3).map(|i| {
		let lr = ArrayD::<f32>::from_elem(IxDyn(&[1, 2, 2, 3]), 100.0);
		let hr = ArrayD::<f32>::from_elem(IxDyn(&[1, 4, 4, 3]), 100.0 + 25.5 * i as f32);
		(lr, hr)
	});

	let evaluation = evaluate_detailed(&model, ds).unwrap();

	assert_eq!(evaluation.psnr_values()[0], f64::INFINITY);
	assert!(evaluation.psnr_values()[1] > evaluation.psnr_values()[2]);
}

#[test]
fn test_evaluate_rejects_larger_batches() {
	let model = model_fn(identity);
	let lr = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 2, 3]));
	let hr = lr.clone();

	match evaluate(&model, vec![(lr, hr)]) {
		Err(SrganError::BatchSize { index, size }) => {
			assert_eq!(index, 0);
			assert_eq!(size, 2);
		},
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn test_evaluate_rejects_unbatched_images() {
	let model = model_fn(identity);
	let lr = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 3]));
	assert!(matches!(
		evaluate(&model, vec![(lr.clone(), lr)]),
		Err(SrganError::ShapeMismatch(_))
	));
}

#[test]
fn test_evaluate_empty_dataset() {
	let model = model_fn(identity);
	let ds: Vec<(ArrayD<f32>, ArrayD<f32>)> = Vec::new();
	assert!(matches!(evaluate(&model, ds), Err(SrganError::EmptyDataset)));
}

#[test]
fn test_evaluate_through_trait_object() {
	let model: Box<dyn Model> = Box::new(NearestNeighbour::new(2).unwrap());
	let lr = ArrayD::<f32>::from_elem(IxDyn(&[1, 1, 1, 3]), 7.0);
	let hr = ArrayD::<f32>::from_elem(IxDyn(&[1, 2, 2, 3]), 7.0);
	assert_eq!(evaluate(model.as_ref(), vec![(lr, hr)]).unwrap(), f64::INFINITY);
}
