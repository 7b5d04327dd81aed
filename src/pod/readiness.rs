use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::k8s::{Pod, PodCondition};

pub const LABEL_READY: &str = "Ready";

/// Ready and total container counts, rendered as `ready/total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub ready_count: usize,
    pub total_containers: usize,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ready_count, self.total_containers)
    }
}

/// Count ready containers the way the API server reports them.
///
/// Init containers that have started count as well, which covers sidecars
/// that keep running next to the main containers.
pub fn derive_pod_readiness_counts(pod: &Pod) -> Readiness {
    let Some(status) = pod.status.as_ref() else {
        return Readiness::default();
    };

    let started_init = status
        .init_container_statuses
        .iter()
        .filter(|c| c.has_started());

    Readiness {
        ready_count: status.container_statuses.iter().filter(|c| c.ready).count()
            + started_init.clone().filter(|c| c.ready).count(),
        total_containers: status.container_statuses.len() + started_init.count(),
    }
}

/// `Ready`, or the reason (falling back to type) of the non-true condition
/// that transitioned longest ago.
pub fn derive_pod_readiness_label(pod: &Pod) -> String {
    let conditions = pod
        .status
        .as_ref()
        .map(|s| s.conditions.as_slice())
        .unwrap_or_default();

    conditions
        .iter()
        .filter(|c| c.status != "True")
        .min_by_key(|c| {
            let at = transitioned_at(c);
            (at.is_none(), at)
        })
        .map(|c| match c.reason.as_deref() {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => c.condition_type.clone(),
        })
        .unwrap_or_else(|| LABEL_READY.to_string())
}

fn transitioned_at(condition: &PodCondition) -> Option<DateTime<Utc>> {
    condition
        .last_transition_time
        .as_deref()
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.to_utc())
}
