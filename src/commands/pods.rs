use tracing::{debug, warn};

use crate::helpers::parse_age;
use crate::models::k8s::{Container, ContainerStatus, Pod};
use crate::models::views::{ContainerView, PodDetailView, PodView};
use crate::pod::{
    derive_pod_readiness_counts, derive_pod_readiness_label, pod_phase, pod_phase_filter_reducer,
    pod_restarts,
};
use crate::quantity::{convert_to_base_value, humanize_binary_bytes, humanize_cpu_cores};

use super::render_table;

const NODE_ANNOTATION: &str = "mkube.io/node";

pub fn build_pod_view(pod: &Pod) -> PodView {
    let node = pod
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(NODE_ANNOTATION))
        .cloned()
        .unwrap_or_else(|| pod.spec.node_name.clone());
    let started = pod
        .metadata
        .creation_timestamp
        .as_deref()
        .or_else(|| pod.status.as_ref().and_then(|s| s.start_time.as_deref()));

    PodView {
        namespace: pod.metadata.namespace.clone(),
        name: pod.metadata.name.clone(),
        node,
        status: pod_phase(pod),
        filter_status: pod_phase_filter_reducer(pod),
        ready: derive_pod_readiness_counts(pod).to_string(),
        readiness: derive_pod_readiness_label(pod),
        restarts: pod_restarts(pod),
        ip: pod
            .status
            .as_ref()
            .map(|s| s.pod_ip.clone())
            .unwrap_or_default(),
        age: parse_age(started),
    }
}

pub fn build_pod_detail(pod: &Pod) -> PodDetailView {
    let (init_statuses, statuses) = match pod.status.as_ref() {
        Some(s) => (
            s.init_container_statuses.as_slice(),
            s.container_statuses.as_slice(),
        ),
        None => (&[][..], &[][..]),
    };

    PodDetailView {
        pod: build_pod_view(pod),
        counts: derive_pod_readiness_counts(pod),
        init_containers: build_container_views(&pod.spec.init_containers, init_statuses),
        containers: build_container_views(&pod.spec.containers, statuses),
    }
}

/// One row per declared container, joined with its status by name.
fn build_container_views(specs: &[Container], statuses: &[ContainerStatus]) -> Vec<ContainerView> {
    let mut views: Vec<ContainerView> = specs
        .iter()
        .map(|spec| {
            let mut view = ContainerView {
                name: spec.name.clone(),
                image: spec.image.clone(),
                state: "Unknown".to_string(),
                cpu_request: spec
                    .resources
                    .requests
                    .get("cpu")
                    .map(|q| display_quantity(q, humanize_cpu_cores))
                    .unwrap_or_default(),
                memory_request: spec
                    .resources
                    .requests
                    .get("memory")
                    .map(|q| display_quantity(q, humanize_binary_bytes))
                    .unwrap_or_default(),
                ..Default::default()
            };
            if let Some(cs) = statuses.iter().find(|cs| cs.name == spec.name) {
                apply_status(&mut view, cs);
            }
            view
        })
        .collect();

    // statuses for containers missing from the pod spec still get a row
    for cs in statuses {
        if !specs.iter().any(|s| s.name == cs.name) {
            let mut view = ContainerView {
                name: cs.name.clone(),
                image: cs.image.clone(),
                ..Default::default()
            };
            apply_status(&mut view, cs);
            views.push(view);
        }
    }
    views
}

fn apply_status(view: &mut ContainerView, cs: &ContainerStatus) {
    let (state, reason) = if cs.state.running.is_some() {
        ("Running".to_string(), String::new())
    } else if let Some(ref w) = cs.state.waiting {
        ("Waiting".to_string(), w.reason.clone())
    } else if let Some(ref t) = cs.state.terminated {
        ("Terminated".to_string(), t.reason.clone())
    } else {
        ("Unknown".to_string(), String::new())
    };
    view.state = state;
    view.reason = reason;
    view.ready = cs.ready;
    view.restarts = cs.restart_count;
    if view.image.is_empty() {
        view.image = cs.image.clone();
    }
}

/// Humanize a quantity string, or show it verbatim when it does not parse.
fn display_quantity(quantity: &str, humanize: fn(f64) -> String) -> String {
    match convert_to_base_value(quantity) {
        Some(value) => humanize(value),
        None => {
            warn!("unparseable quantity {:?}", quantity);
            quantity.to_string()
        }
    }
}

pub fn list_pods(pods: &[Pod], namespace: Option<&str>, filter: Option<&str>) -> Vec<PodView> {
    let views: Vec<PodView> = pods
        .iter()
        .filter(|p| namespace.is_none_or(|ns| p.metadata.namespace == ns))
        .map(build_pod_view)
        .filter(|v| filter.is_none_or(|f| v.filter_status == f))
        .collect();
    debug!("{} of {} pods listed", views.len(), pods.len());
    views
}

pub fn render_pod_table(views: &[PodView]) -> String {
    let rows = views
        .iter()
        .map(|v| {
            vec![
                v.namespace.clone(),
                v.name.clone(),
                v.ready.clone(),
                v.status.clone(),
                v.restarts.to_string(),
                v.age.clone(),
            ]
        })
        .collect();
    render_table(
        &["NAMESPACE", "NAME", "READY", "STATUS", "RESTARTS", "AGE"],
        rows,
    )
}

pub fn render_pod_detail(detail: &PodDetailView) -> String {
    let pod = &detail.pod;
    let mut out = String::new();
    out.push_str(&format!("Name:        {}\n", pod.name));
    out.push_str(&format!("Namespace:   {}\n", pod.namespace));
    out.push_str(&format!("Node:        {}\n", pod.node));
    out.push_str(&format!("Status:      {}\n", pod.status));
    out.push_str(&format!("Readiness:   {}\n", pod.readiness));
    out.push_str(&format!("Ready:       {}\n", detail.counts));
    out.push_str(&format!("Restarts:    {}\n", pod.restarts));
    out.push_str(&format!("IP:          {}\n", pod.ip));
    out.push_str(&format!("Age:         {}\n", pod.age));

    for (title, containers) in [
        ("Init Containers", &detail.init_containers),
        ("Containers", &detail.containers),
    ] {
        if containers.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}:\n", title));
        let rows = containers
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.state.clone(),
                    c.reason.clone(),
                    c.ready.to_string(),
                    c.restarts.to_string(),
                    c.cpu_request.clone(),
                    c.memory_request.clone(),
                ]
            })
            .collect();
        out.push_str(&render_table(
            &["NAME", "STATE", "REASON", "READY", "RESTARTS", "CPU", "MEMORY"],
            rows,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::k8s::{
        ContainerState, ContainerStateRunning, ContainerStateWaiting, ObjectMeta, PodSpec,
        PodStatus, ResourceRequirements,
    };
    use std::collections::HashMap;

    fn sample_pod(namespace: &str, name: &str, waiting_reason: Option<&str>) -> Pod {
        let state = match waiting_reason {
            Some(reason) => ContainerState {
                waiting: Some(ContainerStateWaiting {
                    reason: reason.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            None => ContainerState {
                running: Some(ContainerStateRunning::default()),
                ..Default::default()
            },
        };
        Pod {
            metadata: ObjectMeta {
                name: name.to_string(),
                namespace: namespace.to_string(),
                ..Default::default()
            },
            spec: PodSpec {
                node_name: "rose1".to_string(),
                containers: vec![Container {
                    name: "app".to_string(),
                    image: "registry/app:1".to_string(),
                    resources: ResourceRequirements {
                        requests: HashMap::from([
                            ("cpu".to_string(), "250m".to_string()),
                            ("memory".to_string(), "128Mi".to_string()),
                        ]),
                        ..Default::default()
                    },
                    ..Default::default()
                }],
                ..Default::default()
            },
            status: Some(PodStatus {
                phase: "Running".to_string(),
                container_statuses: vec![ContainerStatus {
                    name: "app".to_string(),
                    ready: waiting_reason.is_none(),
                    restart_count: 2,
                    state,
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_pod_view() {
        let view = build_pod_view(&sample_pod("default", "web", None));
        assert_eq!(view.node, "rose1");
        assert_eq!(view.status, "Running");
        assert_eq!(view.ready, "1/1");
        assert_eq!(view.readiness, "Ready");
        assert_eq!(view.restarts, 2);
        assert_eq!(view.age, "");
    }

    #[test]
    fn test_node_annotation_wins_over_node_name() {
        let mut pod = sample_pod("default", "web", None);
        pod.metadata.annotations = Some(HashMap::from([(
            NODE_ANNOTATION.to_string(),
            "rose2".to_string(),
        )]));
        assert_eq!(build_pod_view(&pod).node, "rose2");
    }

    #[test]
    fn test_container_requests_are_humanized() {
        let detail = build_pod_detail(&sample_pod("default", "web", None));
        assert_eq!(detail.containers.len(), 1);
        let app = &detail.containers[0];
        assert_eq!(app.state, "Running");
        assert_eq!(app.cpu_request, "250m");
        assert_eq!(app.memory_request, "128 MiB");
        assert!(detail.init_containers.is_empty());
    }

    #[test]
    fn test_list_pods_filters() {
        let pods = vec![
            sample_pod("default", "web", None),
            sample_pod("default", "worker", Some("CrashLoopBackOff")),
            sample_pod("kube-system", "dns", None),
        ];
        assert_eq!(list_pods(&pods, None, None).len(), 3);
        assert_eq!(list_pods(&pods, Some("default"), None).len(), 2);

        let crashing = list_pods(&pods, None, Some("CrashLoopBackOff"));
        assert_eq!(crashing.len(), 1);
        assert_eq!(crashing[0].name, "worker");
        assert_eq!(crashing[0].status, "CrashLoopBackOff");
    }

    #[test]
    fn test_render_pod_table() {
        let views = list_pods(&[sample_pod("default", "web", None)], None, None);
        let table = render_pod_table(&views);
        let mut lines = table.lines();
        assert!(lines.next().unwrap().starts_with("NAMESPACE   NAME   READY"));
        assert!(lines.next().unwrap().starts_with("default     web    1/1"));
    }
}
