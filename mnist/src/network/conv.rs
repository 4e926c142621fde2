use candle_core::{Result, Tensor};
use candle_nn::{conv2d, linear, Conv2d, Conv2dConfig, Linear, Module, VarBuilder};
use export::ParameterSource;

use crate::dataset::{IMAGE_COLS, IMAGE_PIXELS, IMAGE_ROWS};

use super::{CONV_FILTERS, HIDDEN_SIZE, NUM_CLASSES};

// Small MNIST convnet: one padded 3x3 conv, then the FC head
pub struct MnistConv {
    conv1: Conv2d,
    fc1: Linear,
    fc2: Linear,
}

impl MnistConv {
    pub fn new(vs: &VarBuilder) -> Result<Self> {
        let cfg = Conv2dConfig {
            padding: 1,
            ..Default::default()
        };
        Ok(Self {
            conv1: conv2d(1, CONV_FILTERS, 3, cfg, vs.pp("conv1"))?,
            fc1: linear(CONV_FILTERS * IMAGE_PIXELS, HIDDEN_SIZE, vs.pp("fc1"))?,
            fc2: linear(HIDDEN_SIZE, NUM_CLASSES, vs.pp("fc2"))?,
        })
    }
}

impl Module for MnistConv {
    fn forward(&self, x: &Tensor) -> Result<Tensor> {
        // Takes flattened 784-pixel rows, same as the FC net.
        let batch = x.dim(0)?;
        let x = x.reshape((batch, 1, IMAGE_ROWS, IMAGE_COLS))?;
        let x = x.apply(&self.conv1)?.relu()?;
        let x = x.flatten_from(1)?;
        let x = x.apply(&self.fc1)?.relu()?;
        x.apply(&self.fc2)
    }
}

impl ParameterSource for MnistConv {
    fn named_parameters(&self) -> Vec<(String, Tensor)> {
        vec![
            ("conv1.weight".to_string(), self.conv1.weight().clone()),
            ("conv1.bias".to_string(), self.conv1.bias().unwrap().clone()),
            ("fc1.weight".to_string(), self.fc1.weight().clone()),
            ("fc1.bias".to_string(), self.fc1.bias().unwrap().clone()),
            ("fc2.weight".to_string(), self.fc2.weight().clone()),
            ("fc2.bias".to_string(), self.fc2.bias().unwrap().clone()),
        ]
    }
}
