use crate::models::k8s::Node;
use crate::models::views::NodeView;
use crate::quantity::{UnitSystem, convert_to_base_value, humanize, humanize_cpu_cores};

use super::render_table;

pub fn build_node_view(node: &Node, memory_system: &'static UnitSystem) -> NodeView {
    let mut nv = NodeView {
        name: node.metadata.name.clone(),
        status: "Unknown".to_string(),
        ..Default::default()
    };

    for cond in &node.status.conditions {
        if cond.condition_type == "Ready" {
            nv.status = if cond.status == "True" {
                "Ready".to_string()
            } else {
                "NotReady".to_string()
            };
        }
    }

    if let Some(cpu) = node.status.capacity.get("cpu") {
        nv.cpu = match convert_to_base_value(cpu) {
            Some(cores) => humanize_cpu_cores(cores),
            None => cpu.clone(),
        };
    }
    if let Some(mem) = node.status.capacity.get("memory") {
        nv.memory = match convert_to_base_value(mem) {
            Some(bytes) => humanize(bytes, memory_system, true).string,
            None => mem.clone(),
        };
    }
    if let Some(pods) = node.status.allocatable.get("pods") {
        nv.pods = pods.clone();
    }

    nv
}

pub fn render_node_table(views: &[NodeView]) -> String {
    let rows = views
        .iter()
        .map(|v| {
            vec![
                v.name.clone(),
                v.status.clone(),
                v.cpu.clone(),
                v.memory.clone(),
                v.pods.clone(),
            ]
        })
        .collect();
    render_table(&["NAME", "STATUS", "CPU", "MEMORY", "PODS"], rows)
}
