use indexmap::IndexSet;

/// Removes duplicate dependency specifiers, keeping first-seen order.
///
/// Comparison is exact: no trimming and no case folding, so `"Lodash"` and
/// `"lodash"` are distinct.
pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(AsRef::as_ref)
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
