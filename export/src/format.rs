/// How a scalar is rendered into a source literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatPolicy {
    /// Default decimal rendering cut to at most [`TRUNCATED_LEN`] characters,
    /// with an `f` suffix. Compact, loses precision.
    Truncated,

    /// Default decimal rendering, verbatim. Round-trips losslessly.
    Full,
}

/// Maximum characters of a truncated literal, suffix excluded.
pub const TRUNCATED_LEN: usize = 6;

/// Renders one finite scalar under the given policy.
///
/// Truncation is character-level on the default rendering, not numeric
/// rounding; `-0.123456` becomes `-0.123f`, keeping whatever digits fit.
/// Values whose rendering is already short stay short (`0` -> `0f`).
/// Callers reject non-finite values before formatting (see `flatten`).
pub fn literal(value: f32, policy: FloatPolicy) -> String {
    let rendered = value.to_string();
    match policy {
        FloatPolicy::Full => rendered,
        FloatPolicy::Truncated => {
            let cut = rendered.len().min(TRUNCATED_LEN);
            let mut literal = String::with_capacity(cut + 1);
            literal.push_str(&rendered[..cut]);
            literal.push('f');
            literal
        }
    }
}
