use candle_core::{Result, Tensor};
use candle_nn::{linear, Linear, Module, VarBuilder};
use export::ParameterSource;

use crate::dataset::IMAGE_PIXELS;

use super::{HIDDEN_SIZE, NUM_CLASSES};

// Fully-connected MNIST classifier (784 -> 128 -> 10)
pub struct MnistFc {
    fc1: Linear,
    fc2: Linear,
}

impl MnistFc {
    pub fn new(vs: &VarBuilder) -> Result<Self> {
        Ok(Self {
            fc1: linear(IMAGE_PIXELS, HIDDEN_SIZE, vs.pp("fc1"))?,
            fc2: linear(HIDDEN_SIZE, NUM_CLASSES, vs.pp("fc2"))?,
        })
    }
}

impl Module for MnistFc {
    fn forward(&self, x: &Tensor) -> Result<Tensor> {
        let x = x.apply(&self.fc1)?.relu()?;
        x.apply(&self.fc2)
    }
}

impl ParameterSource for MnistFc {
    fn named_parameters(&self) -> Vec<(String, Tensor)> {
        vec![
            ("fc1.weight".to_string(), self.fc1.weight().clone()),
            ("fc1.bias".to_string(), self.fc1.bias().unwrap().clone()),
            ("fc2.weight".to_string(), self.fc2.weight().clone()),
            ("fc2.bias".to_string(), self.fc2.bias().unwrap().clone()),
        ]
    }
}
