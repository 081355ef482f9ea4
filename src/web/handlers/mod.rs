// Page and fragment handlers rendering Askama templates

pub mod fragments;
pub mod pages;

/// Lenient non-negative index from a query value; anything unparsable is 0
pub(crate) fn parse_index(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
