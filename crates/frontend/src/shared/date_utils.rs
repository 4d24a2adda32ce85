//! Date helpers for tables and forms. Backend dates are ISO strings; the UI
//! shows them as DD/MM/YYYY.

use chrono::NaiveDate;

/// "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Missing dates render as "-".
pub fn format_date_opt(date_str: Option<&str>) -> String {
    date_str.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Local calendar date of the browser.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_today_iso_shape() {
        let s = today_iso();
        assert_eq!(s.len(), 10);
        assert!(NaiveDate::parse_from_str(&s, "%Y-%m-%d").is_ok());
    }
}
