//! Number formatting for chart labels and tables

/// Formats a number with comma thousands separators and `decimals` fraction digits
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let integer: String = grouped.chars().rev().collect();

    // "-0" after rounding is just zero
    let sign = if integer.chars().all(|c| c == '0' || c == ',')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, integer, d),
        None => format!("{}{}", sign, integer),
    }
}

/// Whole dollars with separators: `$1,234,568`
pub fn format_money(value: f64) -> String {
    let digits = format_number_with_decimals(value.abs(), 0);
    if value < -0.5 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Short money form for axis ticks: `$950`, `$12.3K`, `$4.1M`, `$2.0B`
pub fn format_money_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let (scaled, suffix) = if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        return format!("{}${}", sign, format_number_with_decimals(abs, 0));
    };
    format!("{}${:.1}{}", sign, scaled, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
        assert_eq!(format_number_with_decimals(f64::NAN, 2), "—");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(1234567.89), "$1,234,568");
        assert_eq!(format_money(-950.0), "-$950");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(1000.0), "1,000");
    }

    #[test]
    fn test_format_money_compact() {
        assert_eq!(format_money_compact(950.0), "$950");
        assert_eq!(format_money_compact(12_345.0), "$12.3K");
        assert_eq!(format_money_compact(4_100_000.0), "$4.1M");
        assert_eq!(format_money_compact(2e9), "$2.0B");
    }
}
