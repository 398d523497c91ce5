//! Fixed-width layout helpers.
//!
//! Widths are counted in `char`s, per the fixed-width-font assumption;
//! strings already wider than the requested width pass through unchanged.

/// Centers `s` in `width` columns, putting any surplus padding on the
/// right.
pub(crate) fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_owned();
    }
    let margin = width - len;
    let left = margin / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(margin - left))
}

/// Truncates `s` to at most `width` characters.
pub(crate) fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Tiles `cols` left to right, each centered in `colwidth` columns, with
/// `spacing` spaces between columns.
pub(crate) fn format_columns(cols: &[String], colwidth: usize, spacing: usize) -> String {
    cols.iter()
        .map(|c| center(c, colwidth))
        .collect::<Vec<_>>()
        .join(&" ".repeat(spacing))
}
