//! Pod status column, following the precedence `kubectl get pods` uses.

use tracing::{debug, trace};

use crate::models::k8s::{ContainerStateTerminated, ContainerStatus, Pod, PodSpec};

pub const PHASE_TERMINATING: &str = "Terminating";
pub const PHASE_UNKNOWN: &str = "Unknown";
pub const PHASE_EVICTED: &str = "Evicted";
pub const PHASE_RUNNING: &str = "Running";
pub const PHASE_COMPLETED: &str = "Completed";
pub const PHASE_CRASH_LOOP: &str = "CrashLoopBackOff";

const REASON_NODE_LOST: &str = "NodeLost";
const REASON_EVICTED: &str = "Evicted";
/// Placeholder waiting reason that carries no detail of its own.
const REASON_POD_INITIALIZING: &str = "PodInitializing";

/// Derive the single status label shown for a pod.
///
/// Returns an empty string when the pod carries no status at all.
pub fn pod_phase(pod: &Pod) -> String {
    let Some(status) = pod.status.as_ref() else {
        return String::new();
    };

    if pod.metadata.deletion_timestamp.is_some() {
        return PHASE_TERMINATING.to_string();
    }
    if status.reason == REASON_NODE_LOST {
        return PHASE_UNKNOWN.to_string();
    }
    if status.reason == REASON_EVICTED {
        return PHASE_EVICTED.to_string();
    }

    let mut phase = if status.phase.is_empty() {
        status.reason.clone()
    } else {
        status.phase.clone()
    };

    // The first init container that has not finished decides the phase.
    let mut initializing = false;
    let total = init_container_total(&pod.spec, &status.init_container_statuses);
    for (index, container) in status.init_container_statuses.iter().enumerate() {
        if container.state.completed_successfully()
            || (is_sidecar(&pod.spec, &container.name) && container.has_started())
        {
            continue;
        }
        initializing = true;
        phase = init_phase(container, index, total);
        debug!(
            "pod {}/{} blocked on init container {}: {}",
            pod.metadata.namespace, pod.metadata.name, container.name, phase
        );
        break;
    }
    if initializing {
        return phase;
    }

    // Walk backwards so the earliest container with a reason is written last.
    let mut has_running = false;
    for container in status.container_statuses.iter().rev() {
        let state = &container.state;
        if let Some(terminated) = state.terminated.as_ref().filter(|t| !t.reason.is_empty()) {
            phase = terminated.reason.clone();
        } else if let Some(waiting) = state.waiting.as_ref().filter(|w| !w.reason.is_empty()) {
            phase = waiting.reason.clone();
        } else if let Some(terminated) = state.terminated.as_ref() {
            phase = exit_detail(terminated);
        } else if container.ready && state.running.is_some() {
            has_running = true;
            continue;
        } else {
            continue;
        }
        trace!("container {} sets phase {}", container.name, phase);
    }

    if phase == PHASE_COMPLETED && has_running {
        phase = PHASE_RUNNING.to_string();
    }
    phase
}

/// Coarse bucket used for filtering pod lists by status.
pub fn pod_phase_filter_reducer(pod: &Pod) -> String {
    let phase = pod_phase(pod);
    if phase == PHASE_TERMINATING {
        return phase;
    }
    if phase.contains(PHASE_CRASH_LOOP) {
        return PHASE_CRASH_LOOP.to_string();
    }
    pod.status
        .as_ref()
        .map(|s| s.phase.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or(PHASE_UNKNOWN)
        .to_string()
}

fn is_sidecar(spec: &PodSpec, name: &str) -> bool {
    spec.init_containers
        .iter()
        .find(|c| c.name == name)
        .is_some_and(|c| c.restarts_always())
}

fn init_container_total(spec: &PodSpec, statuses: &[ContainerStatus]) -> usize {
    if spec.init_containers.is_empty() {
        statuses.len()
    } else {
        spec.init_containers.len()
    }
}

fn init_phase(container: &ContainerStatus, index: usize, total: usize) -> String {
    if let Some(terminated) = &container.state.terminated {
        if terminated.reason.is_empty() {
            return format!("Init:{}", exit_detail(terminated));
        }
        return format!("Init:{}", terminated.reason);
    }
    match &container.state.waiting {
        Some(w) if !w.reason.is_empty() && w.reason != REASON_POD_INITIALIZING => {
            format!("Init:{}", w.reason)
        }
        _ => format!("Init:{}/{}", index, total),
    }
}

fn exit_detail(terminated: &ContainerStateTerminated) -> String {
    if terminated.signal != 0 {
        format!("Signal:{}", terminated.signal)
    } else {
        format!("ExitCode:{}", terminated.exit_code)
    }
}
