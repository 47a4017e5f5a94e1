//! Positional narrowing of raw display matrices.

/// Projects the requested columns out of a matrix of display strings.
///
/// The output has the same row count as the input; each output row holds
/// exactly `indices.len()` cells in the requested order. An index beyond a
/// row's length projects to an empty string rather than an error: short rows
/// are routine in sheet exports, and degrading them quietly is the documented
/// policy.
pub fn project_columns(matrix: &[Vec<String>], indices: &[usize]) -> Vec<Vec<String>> {
    matrix
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|&index| row.get(index).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
