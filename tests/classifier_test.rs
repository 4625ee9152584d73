use std::sync::Arc;

use bytesight::classifier::normalize;
use bytesight::{ImageClassifier, InputSize, LabelList, TensorLayout};
use std::io::Write;

mod common;
use common::{gpu_scores, png_bytes, stub_classifier, StubBackend};

#[test]
fn test_predict_bytes_any_resolution() {
    let classifier = stub_classifier(gpu_scores());
    for (w, h) in [(1, 1), (32, 32), (1920, 1080), (75, 300)] {
        let prediction = classifier
            .predict_bytes(&png_bytes(w, h))
            .unwrap_or_else(|| panic!("{}x{} should classify", w, h));
        assert_eq!(prediction.label, "GPU");
        assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);
    }
}

#[test]
fn test_normalized_tensor_matches_declared_input() {
    let size = InputSize::new(224, 160, TensorLayout::Nchw);
    let tensor = normalize(&png_bytes(500, 20), size).unwrap();
    assert_eq!(tensor.shape(), &[1, 3, 160, 224]);
}

#[test]
fn test_undecodable_bytes_give_no_prediction() {
    let classifier = stub_classifier(gpu_scores());
    assert!(classifier.predict_bytes(b"\x89PNG but truncated").is_none());
    assert!(classifier.predict_bytes(&[]).is_none());
}

#[test]
fn test_shape_mismatch_gives_no_prediction() {
    let classifier = stub_classifier(gpu_scores());
    let wrong = ndarray::Array4::<f32>::zeros((1, 16, 16, 3));
    assert!(classifier.predict(&wrong).is_none());
    assert!(classifier.try_predict(&wrong).is_err());
}

#[test]
fn test_confidence_is_softmax_probability() {
    let classifier = stub_classifier(vec![0.0; 9]);
    let prediction = classifier.predict_bytes(&png_bytes(8, 8)).unwrap();
    // uniform scores: first label wins with probability 1/9
    assert_eq!(prediction.label, "CPU");
    assert!((prediction.confidence - 1.0 / 9.0).abs() < 1e-6);
}

#[test]
fn test_labels_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 Fan\n1 Case").unwrap();

    let labels = LabelList::load_or_default(file.path());
    assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["Fan", "Case"]);

    let backend = StubBackend {
        size: InputSize::new(4, 4, TensorLayout::Nhwc),
        scores: vec![0.2, 0.9],
    };
    let classifier = ImageClassifier::builder()
        .with_backend(Arc::new(backend))
        .unwrap()
        .with_labels(labels)
        .build()
        .unwrap();
    assert_eq!(classifier.predict_bytes(&png_bytes(10, 10)).unwrap().label, "Case");
}

#[test]
fn test_missing_label_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let labels = LabelList::load_or_default(dir.path().join("labels.txt"));
    assert_eq!(labels, LabelList::default());
}

#[test]
fn test_unreadable_label_file_falls_back_to_defaults() {
    // a directory cannot be read as a text file
    let dir = tempfile::tempdir().unwrap();
    let labels = LabelList::load_or_default(dir.path());
    assert_eq!(labels, LabelList::default());
}

#[test]
fn test_builder_defaults_labels() {
    let backend = StubBackend {
        size: InputSize::new(4, 4, TensorLayout::Nhwc),
        scores: gpu_scores(),
    };
    let classifier = ImageClassifier::builder()
        .with_backend(Arc::new(backend))
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(classifier.labels(), &LabelList::default());
    assert_eq!(classifier.info().input_size, InputSize::new(4, 4, TensorLayout::Nhwc));
}

#[test]
fn test_builder_rejects_second_model() {
    let make = || {
        Arc::new(StubBackend {
            size: InputSize::new(4, 4, TensorLayout::Nhwc),
            scores: gpu_scores(),
        })
    };
    let result = ImageClassifier::builder()
        .with_backend(make())
        .unwrap()
        .with_backend(make());
    assert!(result.is_err());
}
