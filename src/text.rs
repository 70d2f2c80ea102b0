//! Case folding and rendering helpers shared by the registries.
//!
//! Folding is plain Unicode lower-casing. No locale tailoring is applied.

/// Normalizes a field for identity comparisons.
///
/// Lower-cases one character at a time, so the result never depends on the
/// neighbouring characters (no final-sigma rule).
#[inline]
pub(crate) fn fold(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive substring test. `folded_needle` must already be folded.
#[inline]
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold(haystack).contains(folded_needle)
}

/// Upper-cases the first character and lower-cases the rest.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}
