use candle_core::Tensor;

use crate::error::ExportError;

/// A trained model seen as an ordered set of named parameters.
///
/// The enumeration order is the model's own definition order and is
/// preserved verbatim in the emitted artifact; exporters never re-sort it.
/// Nothing beyond the pairs is consumed (no gradients, no optimizer state).
pub trait ParameterSource {
    fn named_parameters(&self) -> Vec<(String, Tensor)>;
}

/// A dataset seen as ordered, indexed access to labeled samples.
///
/// This is the only capability the exporters rely on, so they can be run
/// against a synthetic in-memory dataset in tests. Indexing past the end
/// is a fatal error, not a silent clamp.
pub trait SampleSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sample tensor and its class label at `index`, in dataset order.
    fn sample(&self, index: usize) -> Result<(Tensor, u8), ExportError>;
}
