//! Console commands: the callers of the quantity and pod logic.

pub mod input;
pub mod nodes;
pub mod pods;
pub mod quantity;

use prettytable::format::FormatBuilder;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use tracing::info;

use crate::cli::Command;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::models::k8s::{Node, Pod};

/// What a command prints, and whether the process should exit cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

pub fn run(command: &Command, config: &Config, output: OutputFormat) -> Result<CommandOutput> {
    match command {
        Command::Pods { source, filter } => {
            let items: Vec<Pod> = input::load_items(source)?;
            let views = pods::list_pods(&items, config.namespace.as_deref(), filter.as_deref());
            info!("{}: {} pods", config.cluster_name, views.len());
            render(views.as_slice(), output, pods::render_pod_table).map(CommandOutput::ok)
        }
        Command::Pod { source } => {
            let items: Vec<Pod> = input::load_items(source)?;
            let details: Vec<_> = items.iter().map(pods::build_pod_detail).collect();
            render(&details, output, |details| {
                details
                    .iter()
                    .map(pods::render_pod_detail)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .map(CommandOutput::ok)
        }
        Command::Nodes { source } => {
            let items: Vec<Node> = input::load_items(source)?;
            let system = config.memory_system();
            let views: Vec<_> = items
                .iter()
                .map(|n| nodes::build_node_view(n, system))
                .collect();
            render(views.as_slice(), output, nodes::render_node_table).map(CommandOutput::ok)
        }
        Command::Humanize { value, units, raw } => {
            let humanized = quantity::humanize_arg(value, units, *raw);
            render(&humanized, output, |h| format!("{}\n", h.string)).map(CommandOutput::ok)
        }
        Command::Dehumanize { value, units } => match quantity::dehumanize_arg(value, units) {
            Some(d) => render(&d, output, |d| format!("{}\n", d.value)).map(CommandOutput::ok),
            // no matching suffix leaves the input as it was
            None => Ok(CommandOutput::ok(format!("{}\n", value))),
        },
        Command::Validate { kind, value } => Ok(match quantity::validate_arg(*kind, value) {
            Ok(()) => CommandOutput::ok("valid\n".to_string()),
            Err(e) => CommandOutput {
                text: format!("{}\n", e),
                success: false,
            },
        }),
        Command::Base { value } => Ok(match quantity::base_arg(value) {
            Some(v) => CommandOutput::ok(format!("{}\n", v)),
            None => CommandOutput {
                text: "invalid\n".to_string(),
                success: false,
            },
        }),
    }
}

fn render<T, F>(value: &T, output: OutputFormat, table: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    Ok(match output {
        OutputFormat::Table => table(value),
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

/// Left-aligned columns separated by three spaces, like `kubectl get`.
pub(crate) fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table.set_format(FormatBuilder::new().padding(0, 3).build());
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    for row in &rows {
        table.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
    }

    // the last column is padded too
    table
        .to_string()
        .lines()
        .map(|line| format!("{}\n", line.trim_end()))
        .collect()
}
