#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use bytesight::{
    BotContext, ClassifierError, Dispatcher, ImageClassifier, InferenceBackend,
    InputSize, LabelList, TensorLayout,
};
use image::{ImageBuffer, ImageFormat, Rgb};
use ndarray::Array4;

/// Backend that returns fixed scores, after checking the input has the
/// declared shape like a real model would.
#[derive(Debug)]
pub struct StubBackend {
    pub size: InputSize,
    pub scores: Vec<f32>,
}

impl InferenceBackend for StubBackend {
    fn input_size(&self) -> InputSize {
        self.size
    }

    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        if input.shape() != self.size.batch_shape() {
            return Err(ClassifierError::ShapeError(format!("{:?}", input.shape())));
        }
        if input.iter().any(|&v| !(0.0..=1.0).contains(&v)) {
            return Err(ClassifierError::ModelError("pixel out of range".into()));
        }
        Ok(self.scores.clone())
    }
}

/// Scores that make "GPU" (index 1 of the default labels) the winner.
pub fn gpu_scores() -> Vec<f32> {
    vec![0.1, 4.0, 0.3, 0.2, 0.0, 0.0, 0.5, 0.1, 0.2]
}

pub fn stub_classifier(scores: Vec<f32>) -> ImageClassifier {
    let backend = StubBackend {
        size: InputSize::new(32, 32, TensorLayout::Nhwc),
        scores,
    };
    ImageClassifier::builder()
        .with_backend(Arc::new(backend))
        .unwrap()
        .with_labels(LabelList::default())
        .build()
        .unwrap()
}

pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(BotContext::new(Arc::new(stub_classifier(gpu_scores())), "$"))
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}
