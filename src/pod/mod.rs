//! Pod lifecycle labels derived from status objects.
//!
//! All functions read only the pod they are given and treat missing
//! structures as empty, so a half-populated object yields baseline values.

mod phase;
mod readiness;
mod restarts;

pub use phase::{
    PHASE_COMPLETED, PHASE_CRASH_LOOP, PHASE_EVICTED, PHASE_RUNNING, PHASE_TERMINATING,
    PHASE_UNKNOWN, pod_phase, pod_phase_filter_reducer,
};
pub use readiness::{
    LABEL_READY, Readiness, derive_pod_readiness_counts, derive_pod_readiness_label,
};
pub use restarts::pod_restarts;
