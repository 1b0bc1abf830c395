//! # Shared Utility Functions
//!
//! Display helpers used by the core library and the web client.
//!
//! ## Amounts
//!
//! - [`format_amount`] - Fixed decimals with thousands separators
//! - [`format_signed_amount`] - Same, with an explicit `+` for non-negative values
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_signed_amount;
//!
//! assert_eq!(format_signed_amount(1234.5, 4), "+1,234.5000");
//! ```

/// Format an amount with `decimals` places and comma separators.
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_amount(-5.0, 4), "-5.0000");
/// ```
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounding can turn a tiny negative into zero; don't print "-0.0000"
    let is_negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if is_negative { "-" } else { "" };

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an amount with a leading `+` when it is non-negative.
pub fn format_signed_amount(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        format!("+{}", format_amount(value, decimals))
    } else {
        format_amount(value, decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_amount(100.0, 2), "100.00");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(-1000.5, 1), "-1,000.5");
    }

    #[test]
    fn test_format_amount_negative_zero() {
        assert_eq!(format_amount(-0.00001, 4), "0.0000");
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(format_signed_amount(5.0, 4), "+5.0000");
        assert_eq!(format_signed_amount(0.0, 4), "+0.0000");
        assert_eq!(format_signed_amount(-5.0, 4), "-5.0000");
    }
}
