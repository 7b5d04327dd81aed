use crate::models::k8s::Pod;

/// Total restarts for the RESTARTS column.
///
/// While any init container has not exited cleanly only init container
/// restarts are counted; afterwards only the main containers are.
pub fn pod_restarts(pod: &Pod) -> i64 {
    let Some(status) = pod.status.as_ref() else {
        return 0;
    };

    let initializing = status
        .init_container_statuses
        .iter()
        .any(|c| !c.state.completed_successfully());
    let counted = if initializing {
        &status.init_container_statuses
    } else {
        &status.container_statuses
    };

    counted.iter().map(|c| i64::from(c.restart_count)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::k8s::{
        ContainerState, ContainerStateTerminated, ContainerStateWaiting, ContainerStatus,
        PodStatus,
    };

    fn finished_init(restart_count: i32) -> ContainerStatus {
        ContainerStatus {
            restart_count,
            state: ContainerState {
                terminated: Some(ContainerStateTerminated {
                    reason: "Completed".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn restarting(restart_count: i32) -> ContainerStatus {
        ContainerStatus {
            restart_count,
            state: ContainerState {
                waiting: Some(ContainerStateWaiting {
                    reason: "CrashLoopBackOff".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_main_containers_after_init() {
        let pod = Pod {
            status: Some(PodStatus {
                init_container_statuses: vec![finished_init(1), finished_init(0)],
                container_statuses: vec![restarting(3), restarting(4)],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(pod_restarts(&pod), 7);
    }

    #[test]
    fn test_counts_init_containers_while_initializing() {
        let pod = Pod {
            status: Some(PodStatus {
                init_container_statuses: vec![finished_init(1), restarting(5)],
                container_statuses: vec![restarting(100)],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(pod_restarts(&pod), 6);
    }

    #[test]
    fn test_no_status() {
        assert_eq!(pod_restarts(&Pod::default()), 0);
    }
}
