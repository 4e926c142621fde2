/// Declaration shape of a weight header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    /// `const std::vector<float> name = { .. };`
    Vector,

    /// `const float name [] = { .. };`
    Array,
}

/// Emits a flat `std::vector<float>` declaration.
pub fn vector_declaration(identifier: &str, literals: &[String]) -> String {
    let mut decl = String::with_capacity(32 + joined_len(literals, 2));
    decl.push_str("const std::vector<float> ");
    decl.push_str(identifier);
    decl.push_str(" = { ");
    decl.push_str(&literals.join(", "));
    decl.push_str(" };");
    decl
}

/// Emits a bare fixed-size `float []` declaration.
pub fn array_declaration(identifier: &str, literals: &[String]) -> String {
    let mut decl = String::with_capacity(32 + joined_len(literals, 1));
    decl.push_str("const float ");
    decl.push_str(identifier);
    decl.push_str(" [] = { ");
    decl.push_str(&literals.join(","));
    decl.push_str(" };");
    decl
}

pub fn declaration(kind: ArrayKind, identifier: &str, literals: &[String]) -> String {
    match kind {
        ArrayKind::Vector => vector_declaration(identifier, literals),
        ArrayKind::Array => array_declaration(identifier, literals),
    }
}

/// Emits a nested `std::vector<std::vector<float>>` declaration, one inner
/// brace group per sample, groups separated by comma + newline.
pub fn nested_declaration(identifier: &str, groups: &[Vec<String>]) -> String {
    let inner: Vec<String> = groups
        .iter()
        .map(|literals| format!("{{ {} }}", literals.join(",")))
        .collect();

    let mut decl = String::with_capacity(64 + inner.iter().map(|g| g.len() + 2).sum::<usize>());
    decl.push_str("const std::vector<std::vector<float>> ");
    decl.push_str(identifier);
    decl.push_str(" = { ");
    decl.push_str(&inner.join(",\n"));
    decl.push_str(" };");
    decl
}

fn joined_len(literals: &[String], sep_len: usize) -> usize {
    literals.iter().map(|l| l.len() + sep_len).sum()
}
