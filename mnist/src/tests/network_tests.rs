use candle_core::{DType, Device, Result, Tensor};
use candle_nn::{Module, VarBuilder, VarMap};
use export::ParameterSource;

use crate::dataset::IMAGE_PIXELS;
use crate::network::{MnistConv, MnistFc, CONV_FILTERS, HIDDEN_SIZE, NUM_CLASSES};

fn builder(varmap: &VarMap) -> VarBuilder<'_> {
    VarBuilder::from_varmap(varmap, DType::F32, &Device::Cpu)
}

#[test]
fn fc_forward_produces_class_logits() -> Result<()> {
    let varmap = VarMap::new();
    let net = MnistFc::new(&builder(&varmap))?;

    let x = Tensor::zeros((4, IMAGE_PIXELS), DType::F32, &Device::Cpu)?;
    let logits = net.forward(&x)?;

    assert_eq!(logits.dims(), &[4, NUM_CLASSES]);
    Ok(())
}

#[test]
fn conv_forward_produces_class_logits() -> Result<()> {
    let varmap = VarMap::new();
    let net = MnistConv::new(&builder(&varmap))?;

    // Same flattened input rows the FC net takes.
    let x = Tensor::zeros((2, IMAGE_PIXELS), DType::F32, &Device::Cpu)?;
    let logits = net.forward(&x)?;

    assert_eq!(logits.dims(), &[2, NUM_CLASSES]);
    Ok(())
}

#[test]
fn fc_parameters_enumerate_in_definition_order() -> Result<()> {
    let varmap = VarMap::new();
    let net = MnistFc::new(&builder(&varmap))?;

    let parameters = net.named_parameters();
    let names: Vec<&str> = parameters.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["fc1.weight", "fc1.bias", "fc2.weight", "fc2.bias"]);

    let counts: Vec<usize> = parameters.iter().map(|(_, t)| t.elem_count()).collect();
    assert_eq!(
        counts,
        [
            IMAGE_PIXELS * HIDDEN_SIZE,
            HIDDEN_SIZE,
            HIDDEN_SIZE * NUM_CLASSES,
            NUM_CLASSES,
        ]
    );
    Ok(())
}

#[test]
fn conv_parameters_enumerate_in_definition_order() -> Result<()> {
    let varmap = VarMap::new();
    let net = MnistConv::new(&builder(&varmap))?;

    let parameters = net.named_parameters();
    let names: Vec<&str> = parameters.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        [
            "conv1.weight",
            "conv1.bias",
            "fc1.weight",
            "fc1.bias",
            "fc2.weight",
            "fc2.bias",
        ]
    );

    // Rank-4 kernel: (out_channels, in_channels, k, k).
    let (_, kernel) = &parameters[0];
    assert_eq!(kernel.dims(), &[CONV_FILTERS, 1, 3, 3]);
    Ok(())
}
