/// Utilities for date formatting
///
/// Dates are shown as DD/MM/YYYY across the console.
use chrono::NaiveDate;

/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Same as [`format_date`], with a dash for a missing date.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// Example: (2024-06-01, 2024-08-31) -> "01/06/2024 - 31/08/2024"
pub fn format_period(from: NaiveDate, to: NaiveDate) -> String {
    format!("{} - {}", format_date(from), format_date(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 15)), "15/03/2024");
        assert_eq!(format_date(d(2024, 12, 1)), "01/12/2024");
    }

    #[test]
    fn test_format_optional_date() {
        assert_eq!(format_optional_date(Some(d(2024, 3, 16))), "16/03/2024");
        assert_eq!(format_optional_date(None), "—");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(
            format_period(d(2024, 6, 1), d(2024, 8, 31)),
            "01/06/2024 - 31/08/2024"
        );
    }
}
