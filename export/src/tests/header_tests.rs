use candle_core::{Device, Tensor};
use tempfile::tempdir;

use crate::artifact::HeaderStore;
use crate::calibration::export_calibration;
use crate::emit::ArrayKind;
use crate::error::ExportError;
use crate::format::FloatPolicy;
use crate::identifier::identifier;
use crate::parameters::{export_parameters, HeaderOptions};
use crate::sample::export_sample;
use crate::source::{ParameterSource, SampleSource};

/// Synthetic model: a fixed ordered list of named tensors.
struct TestModel {
    parameters: Vec<(String, Tensor)>,
}

fn param(name: &str, values: &[f32]) -> (String, Tensor) {
    let tensor = Tensor::from_slice(values, values.len(), &Device::Cpu).expect("test tensor");
    (name.to_string(), tensor)
}

impl ParameterSource for TestModel {
    fn named_parameters(&self) -> Vec<(String, Tensor)> {
        self.parameters.clone()
    }
}

/// Synthetic dataset: in-memory labeled rows.
struct TestDataset {
    samples: Vec<(Vec<f32>, u8)>,
}

impl SampleSource for TestDataset {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn sample(&self, index: usize) -> Result<(Tensor, u8), ExportError> {
        let (values, label) =
            self.samples
                .get(index)
                .ok_or_else(|| ExportError::MissingSource {
                    path: "test dataset".into(),
                    reason: format!("sample index {} out of range", index),
                })?;
        let tensor = Tensor::from_slice(values, values.len(), &Device::Cpu)?;
        Ok((tensor, *label))
    }
}

#[test]
fn identifiers_flatten_path_separators() {
    assert_eq!(identifier("fc2.bias"), "fc2_bias");
    assert_eq!(identifier("stage0.block.1.conv.weight"), "stage0_block_1_conv_weight");
    assert_eq!(identifier("plain"), "plain");
}

#[test]
fn bare_array_header_matches_the_expected_grammar() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let model = TestModel {
        parameters: vec![param(
            "fc2.bias",
            &[0.1, -0.2, 0.05, 1.5, -1.25, 0.75, 2.0, -3.5, 0.125, -0.625],
        )],
    };

    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Array,
    };
    let path = export_parameters(&model, &store, "mnist_fc", options).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "const float fc2_bias [] = { 0.1,-0.2,0.05,1.5,-1.25,0.75,2,-3.5,0.125,-0.625 };\n"
    );
}

#[test]
fn bare_array_declarations_are_separated_by_single_newlines() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let model = TestModel {
        parameters: vec![param("fc1.weight", &[0.5, -0.5]), param("fc1.bias", &[0.25])],
    };

    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Array,
    };
    let path = export_parameters(&model, &store, "mnist_fc", options).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "const float fc1_weight [] = { 0.5,-0.5 };\n\
         const float fc1_bias [] = { 0.25 };\n"
    );
}

#[test]
fn vector_declarations_are_each_followed_by_a_blank_line() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let model = TestModel {
        parameters: vec![
            param("conv1.weight", &[0.5, -0.125]),
            param("conv1.bias", &[2.0]),
        ],
    };

    let options = HeaderOptions {
        policy: FloatPolicy::Truncated,
        kind: ArrayKind::Vector,
    };
    let path = export_parameters(&model, &store, "mnist_conv", options).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "const std::vector<float> conv1_weight = { 0.5f, -0.125f };\n\n\
         const std::vector<float> conv1_bias = { 2f };\n\n"
    );
}

#[test]
fn repeated_exports_are_byte_identical() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let model = TestModel {
        parameters: vec![
            param("fc1.weight", &[0.1, 0.2, 0.3, 0.4]),
            param("fc1.bias", &[-0.75, 0.0625]),
        ],
    };
    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Array,
    };

    let path = export_parameters(&model, &store, "mnist_fc", options).unwrap();
    let first = std::fs::read(&path).unwrap();

    export_parameters(&model, &store, "mnist_fc", options).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn re_export_overwrites_instead_of_appending() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();
    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Array,
    };

    let wide = TestModel {
        parameters: vec![param("fc1.weight", &[0.5, -0.5]), param("fc1.bias", &[0.25])],
    };
    export_parameters(&wide, &store, "mnist_fc", options).unwrap();

    let narrow = TestModel {
        parameters: vec![param("fc2.bias", &[1.0])],
    };
    let path = export_parameters(&narrow, &store, "mnist_fc", options).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "const float fc2_bias [] = { 1 };\n");
}

#[test]
fn colliding_identifiers_abort_before_any_write() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let model = TestModel {
        parameters: vec![param("fc1.weight", &[0.5]), param("fc1_weight", &[0.25])],
    };
    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Array,
    };

    let err = export_parameters(&model, &store, "mnist_fc", options)
        .expect_err("collision must be fatal");
    assert!(matches!(err, ExportError::IdentifierCollision { .. }));
    assert!(!store.network_header("mnist_fc").exists());
}

#[test]
fn non_finite_parameters_leave_no_artifact_behind() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let model = TestModel {
        parameters: vec![param("fc1.weight", &[0.5, f32::NAN])],
    };
    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Array,
    };

    let err = export_parameters(&model, &store, "mnist_fc", options)
        .expect_err("NaN must be fatal");
    assert!(matches!(err, ExportError::NonFinite { .. }));
    assert!(!store.network_header("mnist_fc").exists());
}

#[test]
fn calibration_header_nests_samples_in_dataset_order() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let dataset = TestDataset {
        samples: vec![(vec![0.0, 0.5], 3), (vec![1.0, 1.5], 8)],
    };

    let path = export_calibration(&dataset, &store, 2).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "const std::vector<std::vector<float>> calibration_data = { { 0,0.5 },\n{ 1,1.5 } };\n"
    );
}

#[test]
fn calibration_takes_exactly_the_first_n_samples() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let samples = (0..1200)
        .map(|i| (vec![i as f32, i as f32 + 0.5], (i % 10) as u8))
        .collect();
    let dataset = TestDataset { samples };

    let path = export_calibration(&dataset, &store, 1000).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();

    // One outer brace group plus one per sample.
    assert_eq!(contents.matches('{').count(), 1001);
    assert!(contents.contains("{ 0,0.5 }"));
    assert!(contents.contains("{ 999,999.5 }"));
    assert!(!contents.contains("{ 1000,1000.5 }"));

    let early = contents.find("{ 1,1.5 }").unwrap();
    let late = contents.find("{ 999,999.5 }").unwrap();
    assert!(early < late, "groups must keep ascending index order");
}

#[test]
fn calibration_past_the_dataset_end_is_fatal() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let dataset = TestDataset {
        samples: vec![(vec![0.0], 0); 3],
    };

    let err = export_calibration(&dataset, &store, 5).expect_err("short dataset must fail");
    assert!(matches!(err, ExportError::MissingSource { .. }));
    assert!(!store.calibration_header().exists());
}

#[test]
fn sample_headers_are_keyed_by_label() {
    let dir = tempdir().unwrap();
    let store = HeaderStore::at(dir.path().join("headers")).unwrap();

    let dataset = TestDataset {
        samples: vec![(vec![0.5, -0.5], 7), (vec![0.25], 3)],
    };

    let seven = export_sample(&dataset, &store, 0).unwrap();
    let three = export_sample(&dataset, &store, 1).unwrap();

    assert_ne!(seven, three);
    assert!(seven.ends_with("data_7.h"));
    assert!(three.ends_with("data_3.h"));

    let contents = std::fs::read_to_string(&seven).unwrap();
    assert_eq!(contents, "const float data [] = { 0.5,-0.5 };\n");

    // Same label again: replaced, not appended.
    export_sample(&dataset, &store, 0).unwrap();
    let contents = std::fs::read_to_string(&seven).unwrap();
    assert_eq!(contents, "const float data [] = { 0.5,-0.5 };\n");
}
