mod idx;

use std::path::{Path, PathBuf};

use candle_core::{Device, Tensor};
use export::{ExportError, SampleSource};

pub const IMAGE_ROWS: usize = 28;
pub const IMAGE_COLS: usize = 28;
pub const IMAGE_PIXELS: usize = IMAGE_ROWS * IMAGE_COLS;

// Normalization constants of the MNIST training pipeline.
const NORM_MEAN: f32 = 0.1307;
const NORM_STD: f32 = 0.3081;

#[derive(Debug, Clone, Copy)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    fn images_file(self) -> &'static str {
        match self {
            Split::Train => "train-images-idx3-ubyte",
            Split::Test => "t10k-images-idx3-ubyte",
        }
    }

    fn labels_file(self) -> &'static str {
        match self {
            Split::Train => "train-labels-idx1-ubyte",
            Split::Test => "t10k-labels-idx1-ubyte",
        }
    }
}

/// One MNIST split, fully in memory, pixels already normalized.
///
/// Samples keep the file order of the idx archives; index `i` here is
/// index `i` everywhere downstream.
#[derive(Debug)]
pub struct Mnist {
    dir: PathBuf,
    images: Vec<f32>,
    labels: Vec<u8>,
}

impl Mnist {
    pub fn load(dir: &Path, split: Split) -> Result<Self, ExportError> {
        let images_path = dir.join(split.images_file());
        let (pixels, count, rows, cols) =
            idx::read_images(&images_path).map_err(|e| ExportError::MissingSource {
                path: images_path.clone(),
                reason: e.to_string(),
            })?;

        if rows != IMAGE_ROWS || cols != IMAGE_COLS {
            return Err(ExportError::MissingSource {
                path: images_path,
                reason: format!(
                    "Expected {}x{} images, got {}x{}",
                    IMAGE_ROWS, IMAGE_COLS, rows, cols
                ),
            });
        }

        let labels_path = dir.join(split.labels_file());
        let labels = idx::read_labels(&labels_path).map_err(|e| ExportError::MissingSource {
            path: labels_path.clone(),
            reason: e.to_string(),
        })?;

        if labels.len() != count {
            return Err(ExportError::MissingSource {
                path: labels_path,
                reason: format!("{} labels for {} images", labels.len(), count),
            });
        }

        let images = pixels
            .iter()
            .map(|p| (*p as f32 / 255.0 - NORM_MEAN) / NORM_STD)
            .collect();

        Ok(Self {
            dir: dir.to_path_buf(),
            images,
            labels,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn image(&self, index: usize) -> &[f32] {
        &self.images[index * IMAGE_PIXELS..(index + 1) * IMAGE_PIXELS]
    }

    pub fn label(&self, index: usize) -> u8 {
        self.labels[index]
    }

    /// Gathers the selected samples into one `(N, 784)` batch plus labels.
    pub fn batch(&self, indices: &[usize], device: &Device) -> candle_core::Result<(Tensor, Tensor)> {
        let mut pixels = Vec::with_capacity(indices.len() * IMAGE_PIXELS);
        let mut labels = Vec::with_capacity(indices.len());

        for &index in indices {
            pixels.extend_from_slice(self.image(index));
            labels.push(self.labels[index] as u32);
        }

        let x = Tensor::from_vec(pixels, (indices.len(), IMAGE_PIXELS), device)?;
        let y = Tensor::from_vec(labels, indices.len(), device)?;
        Ok((x, y))
    }
}

impl SampleSource for Mnist {
    fn len(&self) -> usize {
        self.labels.len()
    }

    fn sample(&self, index: usize) -> Result<(Tensor, u8), ExportError> {
        if index >= self.labels.len() {
            return Err(ExportError::MissingSource {
                path: self.dir.clone(),
                reason: format!(
                    "Sample index {} out of range ({} samples)",
                    index,
                    self.labels.len()
                ),
            });
        }

        let tensor = Tensor::from_slice(
            self.image(index),
            (1, IMAGE_ROWS, IMAGE_COLS),
            &Device::Cpu,
        )?;
        Ok((tensor, self.labels[index]))
    }
}
