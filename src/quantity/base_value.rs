use serde_json::Value;

use super::convert::dehumanize;
use super::split::{SplitQuantity, split_value_and_unit};
use super::units::UnitSystemName;
use super::validate::check_number;

/// Normalize a CPU or memory quantity string to a plain number.
///
/// Bare numbers come back unchanged, `m` means millicores (`1321m` is 1.321)
/// and decimal or binary byte suffixes without a trailing `B` are expanded
/// (`100Ki` is 102400). Anything else is `None`.
pub fn convert_to_base_value(value: &str) -> Option<f64> {
    let SplitQuantity { number, unit } = split_value_and_unit(value);
    check_number(number).ok()?;

    let Some(unit) = unit else {
        return Some(number);
    };
    if unit == "m" {
        return Some(number / 1000.0);
    }

    [
        UnitSystemName::BinaryBytesWithoutB,
        UnitSystemName::DecimalBytesWithoutB,
    ]
    .into_iter()
    .find(|name| name.system().contains(unit))
    .and_then(|name| dehumanize(value, name))
    .map(|d| d.value)
}

/// Like [`convert_to_base_value`] for raw API values; non-strings are `None`.
pub fn base_value_from_json(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => convert_to_base_value(s),
        _ => None,
    }
}
