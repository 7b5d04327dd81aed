//! Humanize raw numbers into unit-scaled display values and back.

use serde::Serialize;
use tracing::trace;

use super::round::round;
use super::split::parse_float;
use super::units::{UnitSystem, UnitSystemName};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanizedQuantity {
    /// Mantissa in `unit`, unrounded.
    pub value: f64,
    pub unit: &'static str,
    /// Display string, rounded when requested.
    pub string: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dehumanized {
    pub value: f64,
    pub unit: &'static str,
}

/// Climb from `start` while the mantissa reaches the divisor and larger units remain.
fn step_units(mut value: f64, system: &UnitSystem, start: usize) -> (f64, usize) {
    let mut index = start;
    while value >= system.divisor && index < system.last_index() {
        value /= system.divisor;
        index += 1;
    }
    (value, index)
}

/// Convert `value` into the largest unit of `system` that keeps the mantissa
/// below the divisor.
///
/// With `round_value`, the display value is rounded and then stepped again from the
/// unit already chosen, so `999.999` shows as `1k` rather than `1,000`.
pub fn humanize<S>(value: f64, system: S, round_value: bool) -> HumanizedQuantity
where
    S: Into<&'static UnitSystem>,
{
    let system = system.into();
    let value = if value.is_finite() { value } else { 0.0 };

    let (mut mantissa, mut index) = step_units(value, system, 0);
    let display = if round_value {
        let (rounded, promoted) = step_units(round(mantissa), system, index);
        if promoted > index {
            trace!(
                "{} rounded across {} unit boundary",
                mantissa, system.units[index]
            );
            mantissa /= system.divisor.powi((promoted - index) as i32);
            index = promoted;
        }
        format_grouped(rounded)
    } else {
        mantissa.to_string()
    };

    let unit = system.units[index];
    HumanizedQuantity {
        value: mantissa,
        unit,
        string: join_unit(display, unit, system.spaced),
    }
}

/// Parse a humanized string back into its base value.
///
/// Suffixes are tried from the largest down and the first one contained in
/// `value` wins. Returns `None` when no suffix occurs at all, leaving the
/// caller with its original input.
pub fn dehumanize<S>(value: &str, system: S) -> Option<Dehumanized>
where
    S: Into<&'static UnitSystem>,
{
    let system = system.into();
    let (index, unit) = system
        .units
        .iter()
        .enumerate()
        .rev()
        .find(|(_, unit)| value.contains(**unit))
        .map(|(index, unit)| (index, *unit))?;

    let number = if unit.is_empty() {
        value
    } else {
        &value[..value.find(unit)?]
    };

    Some(Dehumanized {
        value: parse_float(number) * system.divisor.powi(index as i32),
        unit,
    })
}

/// Spaced systems always get the separator, even before an empty unit.
fn join_unit(number: String, unit: &str, spaced: bool) -> String {
    if spaced {
        format!("{} {}", number, unit)
    } else {
        format!("{}{}", number, unit)
    }
}

/// Render a number with `,` between groups of three integer digits.
pub(crate) fn format_grouped(value: f64) -> String {
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

// --- Display shortcuts ---

pub fn humanize_number(value: f64) -> String {
    humanize(value, UnitSystemName::Numeric, true).string
}

pub fn humanize_percentage(value: f64) -> String {
    humanize(value, UnitSystemName::Percentage, true).string
}

pub fn humanize_decimal_bytes(value: f64) -> String {
    humanize(value, UnitSystemName::DecimalBytes, true).string
}

pub fn humanize_decimal_bytes_without_b(value: f64) -> String {
    humanize(value, UnitSystemName::DecimalBytesWithoutB, true).string
}

pub fn humanize_binary_bytes(value: f64) -> String {
    humanize(value, UnitSystemName::BinaryBytes, true).string
}

pub fn humanize_binary_bytes_without_b(value: f64) -> String {
    humanize(value, UnitSystemName::BinaryBytesWithoutB, true).string
}

pub fn humanize_si(value: f64) -> String {
    humanize(value, UnitSystemName::Si, true).string
}

/// Cores below one are shown in millicores (`0.25` becomes `250m`).
pub fn humanize_cpu_cores(value: f64) -> String {
    if value > 0.0 && value < 1.0 {
        format!("{}m", format_grouped(round(value * 1000.0)))
    } else {
        humanize_si(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::units::unit_system;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-12,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_humanize_unrounded() {
        let h = humanize(1000.0, UnitSystemName::Numeric, false);
        assert_eq!(h.value, 1.0);
        assert_eq!(h.unit, "k");
        assert_eq!(h.string, "1k");

        let h = humanize(1536.0, UnitSystemName::BinaryBytes, false);
        assert_eq!(h.value, 1.5);
        assert_eq!(h.unit, "KiB");
        assert_eq!(h.string, "1.5 KiB");

        let h = humanize(12.3456, UnitSystemName::Numeric, false);
        assert_eq!(h.string, "12.3456");
    }

    #[test]
    fn test_humanize_rounded() {
        let cases = [
            (0.0, UnitSystemName::Numeric, "0"),
            (12.3456, UnitSystemName::Numeric, "12.35"),
            (1234.0, UnitSystemName::Numeric, "1.23k"),
            (2_500_000.0, UnitSystemName::Numeric, "2.5m"),
            (3_000_000_000.0, UnitSystemName::Numeric, "3b"),
            (42.5, UnitSystemName::Percentage, "42.5%"),
            (1_000_000.0, UnitSystemName::DecimalBytes, "1 MB"),
            (5_000.0, UnitSystemName::DecimalBytesWithoutB, "5 k"),
            (999.0, UnitSystemName::DecimalBytesWithoutB, "999 "),
            (1_073_741_824.0, UnitSystemName::BinaryBytes, "1 GiB"),
            (512.0, UnitSystemName::BinaryBytesWithoutB, "512 i"),
            (1_572_864.0, UnitSystemName::BinaryBytesWithoutB, "1.5 Mi"),
            (7e15, UnitSystemName::Si, "7P"),
        ];
        for (value, system, expected) in cases {
            assert_eq!(
                humanize(value, system, true).string,
                expected,
                "{} in {}",
                value,
                system
            );
        }
    }

    #[test]
    fn test_rounding_promotes_across_boundary() {
        let h = humanize(999.999, UnitSystemName::Numeric, true);
        assert_eq!(h.string, "1k");
        assert_eq!(h.unit, "k");
        assert_close(h.value, 0.999999);

        let h = humanize(999_999.9, UnitSystemName::Numeric, true);
        assert_eq!(h.string, "1m");

        let h = humanize(1023.99, UnitSystemName::BinaryBytes, true);
        assert_eq!(h.string, "1 KiB");

        // unrounded path keeps the smaller unit
        assert_eq!(humanize(999.999, UnitSystemName::Numeric, false).unit, "");
    }

    #[test]
    fn test_largest_unit_never_overflows() {
        let h = humanize(1_000_000_000_000.0, UnitSystemName::Numeric, true);
        assert_eq!(h.string, "1,000b");
        assert_eq!(h.unit, "b");

        let h = humanize(1_000_000_000_001.0, UnitSystemName::Numeric, true);
        assert_eq!(h.string, "1,000b");
        assert_close(h.value, 1000.000000001);

        let h = humanize(5e18, UnitSystemName::Numeric, true);
        assert_eq!(h.string, "5,000,000,000b");
    }

    #[test]
    fn test_humanize_non_finite_is_zero() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(humanize(value, UnitSystemName::Numeric, true).string, "0");
            assert_eq!(humanize(value, UnitSystemName::Numeric, false).string, "0");
            assert_eq!(
                humanize(value, UnitSystemName::BinaryBytes, true).string,
                "0 B"
            );
        }
    }

    #[test]
    fn test_humanize_negative_values_do_not_step() {
        let h = humanize(-5000.0, UnitSystemName::Numeric, true);
        assert_eq!(h.unit, "");
        assert_eq!(h.string, "-5,000");
    }

    #[test]
    fn test_humanize_unknown_system() {
        let h = humanize(123_456.0, unit_system("lightyears"), true);
        assert_eq!(h.unit, "");
        assert_eq!(h.string, "123,456");
    }

    #[test]
    fn test_dehumanize() {
        let d = dehumanize("100Ki", UnitSystemName::BinaryBytesWithoutB).unwrap();
        assert_eq!(d.value, 102_400.0);
        assert_eq!(d.unit, "Ki");

        let d = dehumanize("3857916Ki", UnitSystemName::BinaryBytesWithoutB).unwrap();
        assert_eq!(d.value, 3_950_505_984.0);

        let d = dehumanize("1.5 MiB", UnitSystemName::BinaryBytes).unwrap();
        assert_eq!(d.value, 1_572_864.0);
        assert_eq!(d.unit, "MiB");

        let d = dehumanize("2.5m", UnitSystemName::Numeric).unwrap();
        assert_eq!(d.value, 2_500_000.0);

        let d = dehumanize("3G", UnitSystemName::Si).unwrap();
        assert_eq!(d.value, 3e9);
    }

    #[test]
    fn test_dehumanize_empty_suffix_matches_bare_numbers() {
        let d = dehumanize("750", UnitSystemName::DecimalBytesWithoutB).unwrap();
        assert_eq!(d.value, 750.0);
        assert_eq!(d.unit, "");
    }

    #[test]
    fn test_dehumanize_no_suffix_returns_none() {
        assert_eq!(dehumanize("100", UnitSystemName::BinaryBytes), None);
        assert_eq!(dehumanize("12 parsecs", UnitSystemName::Percentage), None);
    }

    #[test]
    fn test_dehumanize_round_trip() {
        for value in [0.0, 1.0, 512.0, 1536.0, 1_048_576.0, 123_456_789.0, 5e15] {
            let h = humanize(value, UnitSystemName::BinaryBytesWithoutB, false);
            let d = dehumanize(&h.string, UnitSystemName::BinaryBytesWithoutB).unwrap();
            assert_close(d.value, value);
        }
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.5), "1,234,567.5");
        assert_eq!(format_grouped(-12345.25), "-12,345.25");
    }

    #[test]
    fn test_display_shortcuts() {
        assert_eq!(humanize_number(1500.0), "1.5k");
        assert_eq!(humanize_percentage(99.5), "99.5%");
        assert_eq!(humanize_decimal_bytes(2_000.0), "2 KB");
        assert_eq!(humanize_decimal_bytes_without_b(2_000_000.0), "2 M");
        assert_eq!(humanize_binary_bytes(3_950_505_984.0), "3.68 GiB");
        assert_eq!(humanize_binary_bytes_without_b(104_857_600.0), "100 Mi");
        assert_eq!(humanize_si(1_500_000.0), "1.5M");
    }

    #[test]
    fn test_humanize_cpu_cores() {
        assert_eq!(humanize_cpu_cores(0.25), "250m");
        assert_eq!(humanize_cpu_cores(0.0015), "1.5m");
        assert_eq!(humanize_cpu_cores(0.9999), "999.9m");
        assert_eq!(humanize_cpu_cores(0.0), "0");
        assert_eq!(humanize_cpu_cores(1.0), "1");
        assert_eq!(humanize_cpu_cores(2.5), "2.5");
        assert_eq!(humanize_cpu_cores(1500.0), "1.5k");
    }
}
