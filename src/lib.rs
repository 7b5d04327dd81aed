//! mkube-insight: quantity and pod-state interpretation for the mkube console.
//!
//! The library turns raw numbers and Kubernetes status objects into
//! display-ready values. Everything under [`quantity`] and [`pod`] is pure:
//! no I/O, no shared state, safe to call from any number of rows at once.
//!
//! - [`quantity`] - unit tables, humanize/dehumanize, rounding, validation
//!   and base-value conversion of resource quantity strings
//! - [`pod`] - phase, readiness and restart-count derivation
//! - [`models`] - serde models of the consumed API objects and view rows
//! - [`commands`] - the console commands built on top of the above

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod pod;
pub mod quantity;

pub use error::{InsightError, Result};
pub use pod::{
    Readiness, derive_pod_readiness_counts, derive_pod_readiness_label, pod_phase,
    pod_phase_filter_reducer, pod_restarts,
};
pub use quantity::{
    Dehumanized, HumanizedQuantity, UnitSystem, UnitSystemName, ValidationError,
    base_value_from_json, convert_to_base_value, dehumanize, humanize, round, unit_system,
    validate_cpu, validate_memory, validate_time,
};
