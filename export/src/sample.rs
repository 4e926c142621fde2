use std::path::PathBuf;

use crate::artifact::HeaderStore;
use crate::emit::array_declaration;
use crate::error::ExportError;
use crate::flatten::flatten;
use crate::format::{literal, FloatPolicy};
use crate::source::SampleSource;

/// Exports one labeled dataset entry as a standalone `data` array.
///
/// The label picks the destination (`data_<label>.h`), so each observed
/// label gets its own header; re-exporting a label overwrites it.
pub fn export_sample<S: SampleSource>(
    source: &S,
    store: &HeaderStore,
    index: usize,
) -> Result<PathBuf, ExportError> {
    let (sample, label) = source.sample(index)?;
    let values = flatten(&format!("sample {}", index), &sample)?;
    let literals: Vec<String> = values
        .iter()
        .map(|v| literal(*v, FloatPolicy::Full))
        .collect();

    let mut contents = array_declaration("data", &literals);
    contents.push('\n');

    let path = store.sample_header(label);
    log::info!("Writing sample {} (label {}) to {}", index, label, path.display());
    store.write(&path, &contents)?;

    Ok(path)
}
