use candle_core::Tensor;

use crate::error::ExportError;

/// Flattens a tensor into row-major order (last axis varies fastest).
///
/// The element order is exactly the tensor's logical iteration order, so
/// two runs over the same tensor produce the same sequence. The length is
/// checked against the product of the declared dimensions, and every
/// scalar must be finite; `name` only labels errors.
pub fn flatten(name: &str, tensor: &Tensor) -> Result<Vec<f32>, ExportError> {
    let expected: usize = tensor.dims().iter().product();
    let values = tensor.flatten_all()?.to_vec1::<f32>()?;

    if values.len() != expected {
        return Err(ExportError::ShapeMismatch {
            name: name.to_string(),
            expected,
            actual: values.len(),
        });
    }

    for (index, value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ExportError::NonFinite {
                name: name.to_string(),
                index,
            });
        }
    }

    Ok(values)
}
