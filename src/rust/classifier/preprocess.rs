use image::imageops::FilterType;
use ndarray::Array4;

use super::error::ClassifierError;

/// Channel ordering of the model's image input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[batch, height, width, channels]`, the Keras default
    Nhwc,
    /// `[batch, channels, height, width]`
    Nchw,
}

/// Spatial input dimensions the classifier was exported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSize {
    pub width: u32,
    pub height: u32,
    pub layout: TensorLayout,
}

impl InputSize {
    pub const CHANNELS: usize = 3;

    pub fn new(width: u32, height: u32, layout: TensorLayout) -> Self {
        Self { width, height, layout }
    }

    /// Derives the input size from a declared rank-4 tensor shape.
    ///
    /// The channel axis must hold exactly 3 (RGB). A last axis of 3 means
    /// NHWC, otherwise a second axis of 3 means NCHW; any other shape is
    /// rejected. Dynamic (`-1`) spatial dimensions are rejected because the
    /// normalizer needs a concrete resize target.
    pub fn from_shape(dims: &[i64]) -> Result<Self, ClassifierError> {
        let &[_, d1, d2, d3] = dims else {
            return Err(ClassifierError::ShapeError(format!(
                "Expected a rank-4 image input, found shape {:?}",
                dims
            )));
        };

        let channels = Self::CHANNELS as i64;
        let (layout, height, width) = if d3 == channels {
            (TensorLayout::Nhwc, d1, d2)
        } else if d1 == channels {
            (TensorLayout::Nchw, d2, d3)
        } else {
            return Err(ClassifierError::ShapeError(format!(
                "Model input {:?} has no {}-channel RGB axis",
                dims,
                Self::CHANNELS
            )));
        };

        let to_u32 = |d: i64| u32::try_from(d).ok().filter(|&v| v > 0);
        match (to_u32(width), to_u32(height)) {
            (Some(width), Some(height)) => Ok(Self::new(width, height, layout)),
            _ => Err(ClassifierError::ShapeError(format!(
                "Model input {:?} has no fixed spatial size",
                dims
            ))),
        }
    }

    /// Shape of a single-image batch in this layout.
    pub fn batch_shape(&self) -> [usize; 4] {
        let (h, w, c) = (self.height as usize, self.width as usize, Self::CHANNELS);
        match self.layout {
            TensorLayout::Nhwc => [1, h, w, c],
            TensorLayout::Nchw => [1, c, h, w],
        }
    }
}

/// Decodes `bytes`, resizes to `target`, and returns a `[0, 1]`-scaled
/// single-image batch in the target layout.
///
/// # Errors
/// - `DecodeError` if the bytes are not a supported image format
pub fn normalize(bytes: &[u8], target: InputSize) -> Result<Array4<f32>, ClassifierError> {
    let img = image::load_from_memory(bytes)?;
    let resized = img.resize_exact(target.width, target.height, FilterType::CatmullRom);
    let rgb = resized.to_rgb8();

    let [b, d1, d2, d3] = target.batch_shape();
    let mut tensor = Array4::<f32>::zeros((b, d1, d2, d3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        for (c, &value) in pixel.0.iter().enumerate() {
            let scaled = f32::from(value) / 255.0;
            match target.layout {
                TensorLayout::Nhwc => tensor[[0, y, x, c]] = scaled,
                TensorLayout::Nchw => tensor[[0, c, y, x]] = scaled,
            }
        }
    }
    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(width, height, Rgb(color));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_input_size_from_keras_shape() {
        let size = InputSize::from_shape(&[-1, 224, 224, 3]).unwrap();
        assert_eq!(size, InputSize::new(224, 224, TensorLayout::Nhwc));
    }

    #[test]
    fn test_input_size_from_channels_first_shape() {
        let size = InputSize::from_shape(&[1, 3, 160, 128]).unwrap();
        assert_eq!(size, InputSize::new(128, 160, TensorLayout::Nchw));
    }

    #[test]
    fn test_input_size_rejects_dynamic_dims() {
        assert!(InputSize::from_shape(&[-1, -1, -1, 3]).is_err());
        assert!(InputSize::from_shape(&[1, 224, 3]).is_err());
    }

    #[test]
    fn test_input_size_rejects_non_rgb_channels() {
        for dims in [[1i64, 4, 224, 224], [1, 224, 224, 1], [1, 1, 224, 224], [1, 224, 224, 4]] {
            assert!(
                matches!(InputSize::from_shape(&dims), Err(ClassifierError::ShapeError(_))),
                "{:?} should be rejected",
                dims
            );
        }
    }

    #[test]
    fn test_normalize_scales_to_unit_range() {
        let bytes = png_bytes(10, 20, [255, 0, 51]);
        let tensor = normalize(&bytes, InputSize::new(4, 4, TensorLayout::Nhwc)).unwrap();
        assert_eq!(tensor.shape(), &[1, 4, 4, 3]);
        assert!((tensor[[0, 2, 1, 0]] - 1.0).abs() < 1e-6);
        assert!(tensor[[0, 2, 1, 1]].abs() < 1e-6);
        assert!((tensor[[0, 2, 1, 2]] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_any_resolution_matches_target_shape() {
        let target = InputSize::new(224, 224, TensorLayout::Nhwc);
        for (w, h) in [(1, 1), (640, 480), (97, 1013)] {
            let tensor = normalize(&png_bytes(w, h, [1, 2, 3]), target).unwrap();
            assert_eq!(tensor.shape(), &target.batch_shape());
        }
    }

    #[test]
    fn test_normalize_channels_first() {
        let bytes = png_bytes(8, 8, [0, 255, 0]);
        let tensor = normalize(&bytes, InputSize::new(6, 5, TensorLayout::Nchw)).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 5, 6]);
        assert!((tensor[[0, 1, 4, 5]] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let result = normalize(b"definitely not an image", InputSize::new(4, 4, TensorLayout::Nhwc));
        assert!(matches!(result, Err(ClassifierError::DecodeError(_))));
    }
}
