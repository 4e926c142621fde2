use ahash::AHashMap;

use crate::error::ExportError;

/// Maps a hierarchical parameter name to a flat C identifier.
///
/// `fc2.bias` becomes `fc2_bias`. The substitution alone does not guarantee
/// uniqueness; run [`check_collisions`] over a whole parameter set before
/// emitting anything.
pub fn identifier(name: &str) -> String {
    name.replace('.', "_")
}

/// Fails if two distinct names collapse to the same identifier.
pub fn check_collisions<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), ExportError> {
    let mut seen: AHashMap<String, &str> = AHashMap::new();

    for name in names {
        let id = identifier(name);
        if let Some(first) = seen.get(id.as_str()) {
            return Err(ExportError::IdentifierCollision {
                identifier: id,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        seen.insert(id, name);
    }

    Ok(())
}
