//! Formatting helpers for the species card views.

use num_format::{Locale, ToFormattedString};

/// Population with thousands separators, or `"Unknown"` when not recorded.
pub fn format_population(population: Option<i64>) -> String {
    population
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Optional text field for display, `"Unknown"` when blank.
pub fn or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_uses_separators() {
        assert_eq!(format_population(Some(1_234_567)), "1,234,567");
        assert_eq!(format_population(Some(0)), "0");
        assert_eq!(format_population(None), "Unknown");
    }

    #[test]
    fn blank_text_is_unknown() {
        assert_eq!(or_unknown(Some("Plantae")), "Plantae");
        assert_eq!(or_unknown(Some(" ")), "Unknown");
        assert_eq!(or_unknown(None), "Unknown");
    }
}
