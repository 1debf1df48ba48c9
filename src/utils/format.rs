//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion, with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Format a year, using BCE for negative values
pub fn format_year(year: i64) -> String {
    if year < 0 {
        format!("{} BCE", -year)
    } else {
        year.to_string()
    }
}

/// Format an optional year for a table cell
pub fn format_optional_year(year: Option<i64>) -> String {
    year.map(format_year).unwrap_or_default()
}

/// Format a start/end pair as a single range
pub fn format_year_range(start: Option<i64>, end: Option<i64>) -> String {
    match (start, end) {
        (Some(s), Some(e)) if s == e => format_year(s),
        (Some(s), Some(e)) => format!("{}–{}", format_year(s), format_year(e)),
        (Some(s), None) => format_year(s),
        (None, Some(e)) => format_year(e),
        (None, None) => String::new(),
    }
}

/// Collapse whitespace (artist text spans several lines) into single spaces
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{kept}…")
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(1884), "1884");
        assert_eq!(format_year(0), "0");
        assert_eq!(format_year(-500), "500 BCE");
        assert_eq!(format_optional_year(None), "");
    }

    #[test]
    fn test_format_year_range() {
        assert_eq!(format_year_range(Some(1884), Some(1886)), "1884–1886");
        assert_eq!(format_year_range(Some(1900), Some(1900)), "1900");
        assert_eq!(format_year_range(Some(-500), Some(-450)), "500 BCE–450 BCE");
        assert_eq!(format_year_range(None, Some(12)), "12");
        assert_eq!(format_year_range(None, None), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            single_line("Georges Seurat\nFrench, 1859–1891  "),
            "Georges Seurat French, 1859–1891"
        );
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Nymphéas à Giverny", 8), "Nymphéa…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(125_863), "125,863");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
