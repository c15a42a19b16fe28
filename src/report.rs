// Read-only node report: liveness + cost breakdown per node, and the hourly total.

use serde::Serialize;
use std::path::Path;
use tracing::{instrument, warn};

use crate::config::ReportConfig;
use crate::models::{Node, NodePriceBreakdown};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    pub machine_id: String,
    pub name: String,
    pub up: bool,
    pub price_per_hour: f32,
    /// `None` when the cost is unknown.
    pub breakdown: Option<NodePriceBreakdown>,
}

impl NodeSummary {
    pub fn from_node(node: &Node) -> Self {
        Self {
            machine_id: node.machine_id().to_string(),
            name: node.name.value().to_string(),
            up: node.is_up(),
            price_per_hour: node.price_per_hour,
            breakdown: node.price_breakdown(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub nodes: Vec<NodeSummary>,
    /// Sum over nodes with a known cost.
    pub total_per_hour: f32,
    /// Nodes whose cost is unknown (counted even when left out of `nodes`).
    pub unpriced: usize,
}

pub fn build_report(nodes: &[Node], config: &ReportConfig) -> Report {
    let mut summaries = Vec::with_capacity(nodes.len());
    let mut total_per_hour = 0.0_f32;
    let mut unpriced = 0;
    for node in nodes {
        let summary = NodeSummary::from_node(node);
        match summary.breakdown {
            Some(b) => total_per_hour += b.costs.total_per_hour(),
            None => {
                unpriced += 1;
                if config.only_priced {
                    continue;
                }
            }
        }
        summaries.push(summary);
    }
    Report {
        nodes: summaries,
        total_per_hour,
        unpriced,
    }
}

/// One line per node followed by a total line.
pub fn render_text(report: &Report, config: &ReportConfig) -> String {
    let p = config.precision;
    let cur = &config.currency;
    let mut out = String::new();
    for n in &report.nodes {
        let name = if n.name.is_empty() { "-" } else { n.name.as_str() };
        let state = if n.up { "up" } else { "down" };
        let line = match &n.breakdown {
            Some(b) => format!(
                "{} {} {} cpu={:.*} memory={:.*} total={:.*} {}/h\n",
                n.machine_id,
                name,
                state,
                p,
                b.costs.cpu_usage_per_hour,
                p,
                b.costs.memory_usage_per_hour,
                p,
                b.costs.total_per_hour(),
                cur
            ),
            None => format!("{} {} {} cost unknown\n", n.machine_id, name, state),
        };
        out.push_str(&line);
    }
    out.push_str(&format!(
        "total={:.*} {}/h unpriced={}\n",
        p, report.total_per_hour, cur, report.unpriced
    ));
    out
}

/// Parses a JSON array of nodes. Entries without a machine_id are skipped.
pub fn parse_nodes(json: &str) -> anyhow::Result<Vec<Node>> {
    let nodes: Vec<Node> = serde_json::from_str(json)?;
    let total = nodes.len();
    let nodes: Vec<Node> = nodes
        .into_iter()
        .filter(|n| !n.machine_id().is_empty())
        .collect();
    if nodes.len() < total {
        warn!(
            skipped = total - nodes.len(),
            operation = "parse_nodes",
            "nodes without machine_id skipped"
        );
    }
    Ok(nodes)
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_nodes(path: impl AsRef<Path>) -> anyhow::Result<Vec<Node>> {
    let s = tokio::fs::read_to_string(path.as_ref()).await?;
    parse_nodes(&s)
}
