use tracing::warn;

use crate::cli::QuantityKind;
use crate::quantity::{
    Dehumanized, HumanizedQuantity, ValidationError, convert_to_base_value, dehumanize, humanize,
    unit_system, validate_cpu, validate_memory, validate_time,
};

pub fn humanize_arg(value: &str, units: &str, raw: bool) -> HumanizedQuantity {
    let number = value.parse::<f64>().unwrap_or_else(|_| {
        warn!("{:?} is not a number, humanizing as 0", value);
        f64::NAN
    });
    humanize(number, unit_system(units), !raw)
}

pub fn dehumanize_arg(value: &str, units: &str) -> Option<Dehumanized> {
    dehumanize(value, unit_system(units))
}

pub fn validate_arg(kind: QuantityKind, value: &str) -> Result<(), ValidationError> {
    match kind {
        QuantityKind::Memory => validate_memory(Some(value)),
        QuantityKind::Cpu => validate_cpu(Some(value)),
        QuantityKind::Time => validate_time(Some(value)),
    }
}

pub fn base_arg(value: &str) -> Option<f64> {
    convert_to_base_value(value)
}
