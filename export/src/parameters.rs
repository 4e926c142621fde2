use std::path::PathBuf;

use crate::artifact::HeaderStore;
use crate::emit::{self, ArrayKind};
use crate::error::ExportError;
use crate::flatten::flatten;
use crate::format::{literal, FloatPolicy};
use crate::identifier::{check_collisions, identifier};
use crate::source::ParameterSource;

/// Per-artifact export configuration.
///
/// The policy applies to the whole artifact, never per parameter: truncated
/// literals for size-sensitive embedded headers, full-precision for the
/// training-pipeline headers.
#[derive(Debug, Clone, Copy)]
pub struct HeaderOptions {
    pub policy: FloatPolicy,
    pub kind: ArrayKind,
}

/// Exports every parameter of `source` as one declaration, in enumeration
/// order, into the network's weight header.
///
/// Identifier collisions are detected before anything is flattened or
/// written. The artifact replaces any previous content at the destination.
pub fn export_parameters<S: ParameterSource>(
    source: &S,
    store: &HeaderStore,
    network: &str,
    options: HeaderOptions,
) -> Result<PathBuf, ExportError> {
    let parameters = source.named_parameters();
    check_collisions(parameters.iter().map(|(name, _)| name.as_str()))?;

    let mut contents = String::new();
    for (name, tensor) in &parameters {
        let values = flatten(name, tensor)?;
        let literals: Vec<String> = values
            .iter()
            .map(|v| literal(*v, options.policy))
            .collect();

        contents.push_str(&emit::declaration(options.kind, &identifier(name), &literals));
        match options.kind {
            // Each vector declaration is followed by a blank line.
            ArrayKind::Vector => contents.push_str("\n\n"),
            ArrayKind::Array => contents.push('\n'),
        }
    }

    let path = store.network_header(network);
    log::info!(
        "Writing {} parameter declarations to {}",
        parameters.len(),
        path.display()
    );
    store.write(&path, &contents)?;

    Ok(path)
}
