//! Currency presentation helpers.

/// Format an amount as a fixed-point string with two decimal places.
///
/// Used for error messages and display; no grouping separators or symbol.
pub fn format_currency(amount: f64) -> String {
    format!("{amount:.2}")
}
