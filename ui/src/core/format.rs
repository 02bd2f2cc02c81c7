//! Formatting helpers for presenting likes metrics.

/// Whole-number presentation with thousands grouping, e.g. `12,345`.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// One-decimal presentation, e.g. `28.2`.
pub fn format_decimal(value: f64) -> String {
    format!("{value:.1}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(987.0), "987");
        assert_eq!(format_count(1234.0), "1,234");
        assert_eq!(format_count(1_234_567.0), "1,234,567");
    }

    #[test]
    fn counts_round_to_whole_numbers() {
        assert_eq!(format_count(999.6), "1,000");
        assert_eq!(format_count(28.165), "28");
    }

    #[test]
    fn negative_counts_keep_their_sign() {
        assert_eq!(format_count(-1234.0), "-1,234");
    }

    #[test]
    fn decimals_keep_one_place() {
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(3.14159), "3.1");
    }
}
