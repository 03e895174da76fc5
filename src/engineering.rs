//! Engineering notation: a mantissa in `[1, 1000)` followed by an SI prefix.

use serde::{Deserialize, Serialize};

const SHORT_SUFFIXES: [&str; 13] = [
    "a", "f", "p", "n", "\u{03BC}", "m", "", "k", "M", "G", "T", "P", "E",
];

const LONG_SUFFIXES: [&str; 13] = [
    "atto", "femto", "pico", "nano", "micro", "milli", "", "kilo", "mega", "giga", "tera", "peta",
    "exa",
];

const SIGNIFICANT_DIGITS: i32 = 4;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuffixStyle {
    #[default]
    Short,
    Long,
}

impl SuffixStyle {
    fn table(&self) -> &'static [&'static str; 13] {
        match self {
            SuffixStyle::Short => &SHORT_SUFFIXES,
            SuffixStyle::Long => &LONG_SUFFIXES,
        }
    }

    /// Prefix for `10^(3 * power3)`, or `"?"` outside the table.
    pub fn suffix(&self, power3: i32) -> &'static str {
        power3
            .checked_add(6)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.table().get(index))
            .copied()
            .unwrap_or("?")
    }
}

fn decimals_for(mantissa: f64) -> usize {
    let integer_digits = (mantissa.log10().floor() as i32 + 1).max(1);
    (SIGNIFICANT_DIGITS - integer_digits).max(0) as usize
}

/// Rounds to [`SIGNIFICANT_DIGITS`], returning the value and its decimal places.
fn round_significant(mantissa: f64) -> (f64, usize) {
    let decimals = decimals_for(mantissa);
    let scale = 10f64.powi(decimals as i32);
    let rounded = (mantissa * scale).round() / scale;
    // A carry into the next decade leaves an exact power of ten.
    (rounded, decimals_for(rounded).min(decimals))
}

pub fn format_engineering(value: f64, style: SuffixStyle) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let power3 = (magnitude.log10() / 3.0).floor();
    if power3 < -5.0 {
        return format!("{sign}Tiny");
    }
    if power3 > 5.0 {
        return format!("{sign}Huge");
    }
    let mut power3 = power3 as i32;

    let (mut mantissa, mut decimals) = round_significant(magnitude * 10f64.powi(-power3 * 3));
    // Rounding up to 1000 moves the reading to the next prefix.
    if mantissa >= 1000.0 {
        power3 += 1;
        if power3 > 5 {
            return format!("{sign}Huge");
        }
        (mantissa, decimals) = round_significant(mantissa / 1000.0);
    }

    let suffix = style.suffix(power3);
    if suffix.is_empty() {
        format!("{sign}{mantissa:.decimals$}")
    } else {
        format!("{sign}{mantissa:.decimals$} {suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(format_engineering(f64::NAN, SuffixStyle::Short), "NaN");
        assert_eq!(format_engineering(0.0, SuffixStyle::Short), "0.0");
        assert_eq!(format_engineering(-0.0, SuffixStyle::Long), "0.0");
    }

    #[test]
    fn picks_prefix_by_power_of_thousand() {
        assert_eq!(format_engineering(1500.0, SuffixStyle::Short), "1.500 k");
        assert_eq!(format_engineering(1500.0, SuffixStyle::Long), "1.500 kilo");
        assert_eq!(format_engineering(0.0025, SuffixStyle::Short), "2.500 m");
        assert_eq!(format_engineering(47e-6, SuffixStyle::Long), "47.00 micro");
        assert_eq!(format_engineering(330e6, SuffixStyle::Short), "330.0 M");
    }

    #[test]
    fn rounding_carry_keeps_four_digits() {
        assert_eq!(format_engineering(9.99996, SuffixStyle::Short), "10.00");
        assert_eq!(format_engineering(99.9996, SuffixStyle::Short), "100.0");
        assert_eq!(format_engineering(9999.6, SuffixStyle::Short), "10.00 k");
        assert_eq!(format_engineering(-99.9996e-3, SuffixStyle::Long), "-100.0 milli");
    }

    #[test]
    fn rounding_up_to_a_thousand_takes_next_prefix() {
        assert_eq!(format_engineering(999.96, SuffixStyle::Short), "1.000 k");
        assert_eq!(format_engineering(999.96e3, SuffixStyle::Long), "1.000 mega");
        assert_eq!(format_engineering(999.96e15, SuffixStyle::Short), "Huge");
    }

    #[test]
    fn unit_range_has_no_suffix() {
        assert_eq!(format_engineering(9.375, SuffixStyle::Short), "9.375");
        assert_eq!(format_engineering(12.5, SuffixStyle::Long), "12.50");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_engineering(-1500.0, SuffixStyle::Short), "-1.500 k");
        assert_eq!(format_engineering(f64::NEG_INFINITY, SuffixStyle::Short), "-Huge");
    }

    #[test]
    fn out_of_range_magnitudes() {
        assert_eq!(format_engineering(1e20, SuffixStyle::Short), "Huge");
        assert_eq!(format_engineering(f64::INFINITY, SuffixStyle::Long), "Huge");
        assert_eq!(format_engineering(1e-20, SuffixStyle::Short), "Tiny");
        assert_eq!(format_engineering(-1e-20, SuffixStyle::Short), "-Tiny");
    }

    #[test]
    fn suffix_lookup_outside_table() {
        assert_eq!(SuffixStyle::Short.suffix(-7), "?");
        assert_eq!(SuffixStyle::Long.suffix(7), "?");
        assert_eq!(SuffixStyle::Short.suffix(-6), "a");
        assert_eq!(SuffixStyle::Long.suffix(6), "exa");
        assert_eq!(SuffixStyle::Short.suffix(i32::MAX), "?");
        assert_eq!(SuffixStyle::Long.suffix(i32::MIN), "?");
    }
}
