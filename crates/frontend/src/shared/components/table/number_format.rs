//! Number formatting helpers for tables and KPI cards

/// Formats a number with a space as the thousands separator and the given
/// number of decimals.
///
/// ```
/// # use evdms_frontend::shared::components::table::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Vietnamese dong: no minor units.
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", format_number_int(value))
}

/// Integer percentage as stored by the summary reducers.
pub fn format_percent(value: i64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
        assert_eq!(format_number_int(-123.0), "-123");
    }

    #[test]
    fn test_format_vnd_and_percent() {
        assert_eq!(format_vnd(1_250_000_000.0), "1 250 000 000 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_percent(42), "42%");
    }
}
