/// A quantity string cut at its first alphabetic character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitQuantity<'a> {
    /// Parsed leading number; NaN when the prefix holds no digits.
    pub number: f64,
    pub unit: Option<&'a str>,
}

/// Split `"128Mi"` into `128.0` and `Some("Mi")`.
///
/// Never fails: a malformed number surfaces as NaN for the caller to reject.
pub fn split_value_and_unit(value: &str) -> SplitQuantity<'_> {
    match value.find(|c: char| c.is_ascii_alphabetic()) {
        Some(index) => SplitQuantity {
            number: parse_float(&value[..index]),
            unit: Some(&value[index..]),
        },
        None => SplitQuantity {
            number: parse_float(value),
            unit: None,
        },
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// `"12.5 "` gives 12.5, `"1.2.3"` gives 1.2, `""` and `"-"` give NaN.
pub(crate) fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_unit() {
        let split = split_value_and_unit("128Mi");
        assert_eq!(split.number, 128.0);
        assert_eq!(split.unit, Some("Mi"));

        let split = split_value_and_unit("250m");
        assert_eq!(split.number, 250.0);
        assert_eq!(split.unit, Some("m"));
    }

    #[test]
    fn test_split_without_unit() {
        let split = split_value_and_unit("0.5");
        assert_eq!(split.number, 0.5);
        assert_eq!(split.unit, None);
    }

    #[test]
    fn test_split_takes_everything_after_first_letter() {
        let split = split_value_and_unit("1Mi2");
        assert_eq!(split.number, 1.0);
        assert_eq!(split.unit, Some("Mi2"));

        // exponent markers are letters too
        let split = split_value_and_unit("1e3");
        assert_eq!(split.number, 1.0);
        assert_eq!(split.unit, Some("e3"));
    }

    #[test]
    fn test_split_malformed_number_is_nan() {
        assert!(split_value_and_unit("Mi").number.is_nan());
        assert!(split_value_and_unit("").number.is_nan());
        assert!(split_value_and_unit("-").number.is_nan());
        assert!(split_value_and_unit(".Ki").number.is_nan());
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("  42 "), 42.0);
        assert_eq!(parse_float("-7"), -7.0);
        assert_eq!(parse_float("+.5"), 0.5);
        assert_eq!(parse_float("3."), 3.0);
        assert_eq!(parse_float("2e3"), 2000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("abc").is_nan());
    }
}
