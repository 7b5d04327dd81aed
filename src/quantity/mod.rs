//! Resource quantities: unit tables, humanizing, validation and base values.
//!
//! Quantity strings follow the API wire format, a decimal number directly
//! followed by an optional suffix (`250m`, `128Mi`, `30s`).

mod base_value;
mod convert;
mod round;
mod split;
mod units;
mod validate;

pub use base_value::{base_value_from_json, convert_to_base_value};
pub use convert::{
    Dehumanized, HumanizedQuantity, dehumanize, humanize, humanize_binary_bytes,
    humanize_binary_bytes_without_b, humanize_cpu_cores, humanize_decimal_bytes,
    humanize_decimal_bytes_without_b, humanize_number, humanize_percentage, humanize_si,
};
pub use round::round;
pub use split::{SplitQuantity, split_value_and_unit};
pub use units::{FALLBACK, UnitSystem, UnitSystemName, unit_system};
pub use validate::{
    CPU_UNITS, MEMORY_UNITS, TIME_UNITS, ValidationError, validate_cpu, validate_memory,
    validate_time,
};
