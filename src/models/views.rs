use serde::Serialize;

use crate::pod::Readiness;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PodView {
    pub namespace: String,
    pub name: String,
    pub node: String,
    pub status: String,
    pub filter_status: String,
    pub ready: String,
    pub readiness: String,
    pub restarts: i64,
    pub ip: String,
    pub age: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PodDetailView {
    #[serde(flatten)]
    pub pod: PodView,
    pub counts: Readiness,
    pub init_containers: Vec<ContainerView>,
    pub containers: Vec<ContainerView>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContainerView {
    pub name: String,
    pub image: String,
    pub state: String,
    pub ready: bool,
    pub restarts: i32,
    pub reason: String,
    pub cpu_request: String,
    pub memory_request: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeView {
    pub name: String,
    pub status: String,
    pub cpu: String,
    pub memory: String,
    pub pods: String,
}
