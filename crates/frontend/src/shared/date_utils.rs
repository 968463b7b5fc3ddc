/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a typed date to DD.MM.YYYY
pub fn format_naive_date(date: chrono::NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_naive_date() {
        let date = chrono::NaiveDate::from_ymd_opt(1987, 3, 15).expect("valid date");
        assert_eq!(format_naive_date(date), "15.03.1987");
    }
}
