//! Range expressions used to pick classes from a listing.
//!
//! Accepted forms, with `max` the number of listed items:
//!
//! | Expression | Meaning |
//! |---|---|
//! | `""` or `-` | every item, `1..=max` |
//! | `a-b` | `a..=b`, bounds swapped if reversed and clamped into `1..=max` |
//! | `-b` / `a-` | missing start is 1, missing end is `max` |
//! | `n` | the single item `n`, only when `1 <= n <= max` |
//!
//! Anything else selects nothing; parsing never fails.

use crate::{Error, Result};

/// Parse `expression` into an ascending list of 1-based indices.
///
/// ```rust
/// use academy_dl::utils::parse_range;
///
/// assert_eq!(parse_range("-", 5), vec![1, 2, 3, 4, 5]);
/// assert_eq!(parse_range("4-2", 5), vec![2, 3, 4]);
/// assert!(parse_range("abc", 5).is_empty());
/// ```
pub fn parse_range(expression: &str, max_index: usize) -> Vec<usize> {
    if max_index == 0 {
        return Vec::new();
    }
    let s = expression.trim();
    if s.is_empty() || s == "-" {
        return (1..=max_index).collect();
    }

    if let Some((start, end)) = s.split_once('-') {
        let (Some(start), Some(end)) = (bound(start, 1), bound(end, max_index)) else {
            return Vec::new();
        };
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        let start = start.clamp(1, max_index);
        let end = end.clamp(1, max_index);
        return (start..=end).collect();
    }

    match s.parse::<usize>() {
        Ok(n) if (1..=max_index).contains(&n) => vec![n],
        _ => Vec::new(),
    }
}

fn bound(text: &str, default: usize) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() {
        Some(default)
    } else {
        text.parse().ok()
    }
}

/// [`parse_range`], reporting an empty selection as
/// [`Error::InvalidSelection`].
pub fn select_range(expression: &str, max_index: usize) -> Result<Vec<usize>> {
    let selection = parse_range(expression, max_index);
    if selection.is_empty() {
        return Err(Error::InvalidSelection(format!(
            "'{expression}' selects nothing out of {max_index} items"
        )));
    }
    Ok(selection)
}
