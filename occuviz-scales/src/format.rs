//! Human readable numbers for labels and tooltips.

/// Groups the integer part of numbers, e.g. `166400.5` -> `166,400.5`.
///
/// Defines the characters used as a decimal symbol as well as the character used to
/// delimit groups of characters in the integer part of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal: char,
    group_delimiter: char,
    max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberFormat {
    pub fn new() -> Self {
        Self {
            decimal: '.',
            group_delimiter: ',',
            max_fraction_digits: 2,
        }
    }

    pub fn with_separators(decimal: char, group_delimiter: char) -> Self {
        Self {
            decimal,
            group_delimiter,
            ..Self::new()
        }
    }

    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Format with grouped thousands. Fraction digits are rounded to the
    /// configured maximum and trailing zeros are dropped. Non-finite values
    /// render as the missing value sentinel.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return MissingDisplayValue::Value.sentinel().to_string();
        }

        let text = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
        // Values that round to zero lose their sign
        if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
            out.push('-');
        }
        out.push_str(&self.group_value(integer));
        if !fraction.is_empty() {
            out.push(self.decimal);
            out.push_str(fraction);
        }
        out
    }

    pub fn format_count(&self, value: u64) -> String {
        self.group_value(&value.to_string())
    }

    /// Insert the group delimiter every three digits, counting from the right
    fn group_value(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.group_delimiter);
            }
            grouped.push(ch);
        }
        grouped
    }
}

pub fn format_thousands(value: f64) -> String {
    NumberFormat::new().format(value)
}

pub fn format_count(value: u64) -> String {
    NumberFormat::new().format_count(value)
}

/// Absent display values and the text shown in their place. These are
/// substituted where a label is rendered and never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingDisplayValue {
    Name,
    Value,
    Count,
}

impl MissingDisplayValue {
    pub const fn sentinel(self) -> &'static str {
        match self {
            MissingDisplayValue::Name => "Unknown",
            MissingDisplayValue::Value => "N/A",
            MissingDisplayValue::Count => "0",
        }
    }
}

/// Tooltip name, `"Unknown"` when absent or blank
pub fn display_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => substitute(MissingDisplayValue::Name),
    }
}

/// Thousands-separated tooltip value, `"N/A"` when absent
pub fn display_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format_thousands(value),
        None => substitute(MissingDisplayValue::Value),
    }
}

/// Thousands-separated headline count, `"0"` when absent
pub fn display_count(count: Option<u64>) -> String {
    match count {
        Some(count) => format_count(count),
        None => substitute(MissingDisplayValue::Count),
    }
}

fn substitute(missing: MissingDisplayValue) -> String {
    tracing::debug!(?missing, "substituting missing display value");
    missing.sentinel().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0")]
    #[case(999.0, "999")]
    #[case(1000.0, "1,000")]
    #[case(1200.0, "1,200")]
    #[case(166400.0, "166,400")]
    #[case(166400.5, "166,400.5")]
    #[case(3175390.0, "3,175,390")]
    #[case(45.42, "45.42")]
    #[case(103.389, "103.39")]
    #[case(-1234567.25, "-1,234,567.25")]
    #[case(-0.001, "0")]
    fn test_format_thousands(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_thousands(value), expected);
    }

    #[test]
    fn test_non_finite_is_missing() {
        assert_eq!(format_thousands(f64::NAN), "N/A");
        assert_eq!(format_thousands(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_custom_separators() {
        let fmt = NumberFormat::with_separators(',', '.');
        assert_eq!(fmt.format(1234567.5), "1.234.567,5");
        assert_eq!(fmt.with_max_fraction_digits(0).format(1234.56), "1.235");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(47950), "47,950");
        assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(display_name(None), "Unknown");
        assert_eq!(display_name(Some("  ")), "Unknown");
        assert_eq!(display_name(Some("Nurse")), "Nurse");
        assert_eq!(display_value(None), "N/A");
        assert_eq!(display_value(Some(1200.0)), "1,200");
        assert_eq!(display_count(None), "0");
        assert_eq!(display_count(Some(1000)), "1,000");
    }
}
