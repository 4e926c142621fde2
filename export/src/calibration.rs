use std::path::PathBuf;

use crate::artifact::HeaderStore;
use crate::emit::nested_declaration;
use crate::error::ExportError;
use crate::flatten::flatten;
use crate::format::{literal, FloatPolicy};
use crate::source::SampleSource;

/// Number of samples quantization calibration is computed over.
pub const CALIBRATION_SAMPLES: usize = 1000;

/// Exports the first `count` dataset samples, in dataset order, as one
/// nested `calibration_data` declaration.
///
/// The prefix is not shuffled and `count` is not validated against the
/// dataset length; a source that cannot supply an index fails the run.
pub fn export_calibration<S: SampleSource>(
    source: &S,
    store: &HeaderStore,
    count: usize,
) -> Result<PathBuf, ExportError> {
    let mut groups = Vec::with_capacity(count);

    for index in 0..count {
        let (sample, _label) = source.sample(index)?;
        let values = flatten(&format!("sample {}", index), &sample)?;
        groups.push(
            values
                .iter()
                .map(|v| literal(*v, FloatPolicy::Full))
                .collect(),
        );
    }

    let mut contents = nested_declaration("calibration_data", &groups);
    contents.push('\n');

    let path = store.calibration_header();
    log::info!("Writing {} calibration samples to {}", count, path.display());
    store.write(&path, &contents)?;

    Ok(path)
}
