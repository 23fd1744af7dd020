//! Number formatting for tables and cards

/// Formats a number with a comma thousands separator and the given decimals.
///
/// ```
/// # use frontend::shared::components::table::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{result}.{d}"),
        None => result,
    }
}

/// Dollar amount with two decimals: 45231.89 -> "$45,231.89".
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Integer with thousands separator: 2350.0 -> "2,350".
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Signed percentage with one decimal: 20.1 -> "+20.1%", -2.1 -> "-2.1%".
pub fn format_change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(45231.89), "$45,231.89");
        assert_eq!(format_money(799.99), "$799.99");
        assert_eq!(format_money(1234567.0), "$1,234,567.00");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(2350.0), "2,350");
        assert_eq!(format_number_int(567.0), "567");
        assert_eq!(format_number_int(1000000.0), "1,000,000");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(20.1), "+20.1%");
        assert_eq!(format_change(-2.1), "-2.1%");
        assert_eq!(format_change(0.0), "0.0%");
    }
}
