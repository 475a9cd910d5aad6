//! Numeric helpers shared by the per-catalog normalizers.
//!
//! Normalization is total: anything that fails to parse or falls outside the
//! unified rating scale becomes `None`, never an error.

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Normalize a raw rating onto the unified [0,10] scale.
///
/// Returns the value rounded to one decimal place, or `None` when it falls
/// outside the scale (a sentinel like -1 or a mis-scaled value).
pub fn normalize_rating(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = round1(value);
    if (0.0..=10.0).contains(&rounded) {
        Some(rounded)
    } else {
        None
    }
}

/// Parse a rating out of a string field ("9.3", "N/A", "82").
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().and_then(normalize_rating)
}

/// Parse the leading unsigned integer of a string ("142 min" -> 142).
pub fn parse_leading_u32(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Parse the numerator of a "value/scale" pair ("9.3/10" -> 9.3).
pub fn parse_fraction_value(raw: &str) -> Option<f64> {
    let numerator = raw.split('/').next()?;
    numerator.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(9.23), 9.2);
        assert_eq!(round1(9.25), 9.3);
        assert_eq!(round1(7.0), 7.0);
    }

    #[test]
    fn test_normalize_rating_bounds() {
        assert_eq!(normalize_rating(0.0), Some(0.0));
        assert_eq!(normalize_rating(10.0), Some(10.0));
        assert_eq!(normalize_rating(10.04), Some(10.0));
        assert_eq!(normalize_rating(-1.0), None);
        assert_eq!(normalize_rating(82.0), None);
        assert_eq!(normalize_rating(f64::NAN), None);
    }

    #[test]
    fn test_parse_rating_handles_markers() {
        assert_eq!(parse_rating("9.3"), Some(9.3));
        assert_eq!(parse_rating("N/A"), None);
        assert_eq!(parse_rating(""), None);
    }

    #[test]
    fn test_parse_leading_u32() {
        assert_eq!(parse_leading_u32("142 min"), Some(142));
        assert_eq!(parse_leading_u32("97"), Some(97));
        assert_eq!(parse_leading_u32("N/A"), None);
        assert_eq!(parse_leading_u32(""), None);
    }

    #[test]
    fn test_parse_fraction_value() {
        assert_eq!(parse_fraction_value("9.3/10"), Some(9.3));
        assert_eq!(parse_fraction_value("82/100"), Some(82.0));
        assert_eq!(parse_fraction_value("N/A"), None);
    }
}
