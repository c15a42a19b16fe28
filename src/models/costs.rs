// Hourly cost figures derived from a node's price. Computed on request, never stored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    pub cpu_usage_per_hour: f32,
    pub memory_usage_per_hour: f32,
}

impl Costs {
    pub fn total_per_hour(&self) -> f32 {
        self.cpu_usage_per_hour + self.memory_usage_per_hour
    }
}

/// Unit prices plus the hourly split; `costs` is flattened on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePriceBreakdown {
    pub cpu_per_core: f32,
    pub memory_per_byte: f32,
    #[serde(flatten)]
    pub costs: Costs,
}
