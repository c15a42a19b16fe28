// Node aggregate: one monitored machine, its per-device stats, and derived cost/liveness.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::{Costs, DiskStats, InterfaceStats, LabelLastValue, NodePriceBreakdown};
use crate::timeseries::{TimeSeries, data_is_missing, is_nan};

const BYTES_PER_GB: f32 = 1000.0 * 1000.0 * 1000.0;

/// Identifier of a workload instance scheduled on a node. The instance itself lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default = "Node::unidentified")]
pub struct Node {
    machine_id: String,

    pub agent_version: LabelLastValue,
    pub name: LabelLastValue,
    pub uptime: TimeSeries,

    pub cpu_capacity: TimeSeries,
    pub cpu_usage_percent: TimeSeries,
    pub cpu_usage_by_mode: HashMap<String, TimeSeries>,

    pub memory_total_bytes: TimeSeries,
    pub memory_free_bytes: TimeSeries,
    pub memory_available_bytes: TimeSeries,
    pub memory_cached_bytes: TimeSeries,

    pub disks: HashMap<String, DiskStats>,
    pub net_interfaces: Vec<InterfaceStats>,

    /// Back-reference only; not part of the node's external representation.
    #[serde(skip)]
    instances: Vec<InstanceId>,

    pub cloud_provider: LabelLastValue,
    pub region: LabelLastValue,
    pub availability_zone: LabelLastValue,
    pub instance_type: LabelLastValue,
    pub instance_life_cycle: LabelLastValue,

    /// All-in hourly price of the machine; 0 when unknown.
    pub price_per_hour: f32,
}

impl Node {
    pub fn new(machine_id: impl Into<String>) -> Self {
        Self {
            machine_id: machine_id.into(),
            agent_version: LabelLastValue::default(),
            name: LabelLastValue::default(),
            uptime: TimeSeries::default(),
            cpu_capacity: TimeSeries::default(),
            cpu_usage_percent: TimeSeries::default(),
            cpu_usage_by_mode: HashMap::new(),
            memory_total_bytes: TimeSeries::default(),
            memory_free_bytes: TimeSeries::default(),
            memory_available_bytes: TimeSeries::default(),
            memory_cached_bytes: TimeSeries::default(),
            disks: HashMap::new(),
            net_interfaces: Vec::new(),
            instances: Vec::new(),
            cloud_provider: LabelLastValue::default(),
            region: LabelLastValue::default(),
            availability_zone: LabelLastValue::default(),
            instance_type: LabelLastValue::default(),
            instance_life_cycle: LabelLastValue::default(),
            price_per_hour: 0.0,
        }
    }

    // Fills fields missing from a serialized node; an absent machine_id stays empty.
    fn unidentified() -> Self {
        Self::new(String::new())
    }

    pub fn machine_id(&self) -> &str {
        &self.machine_id
    }

    /// CPU usage reporting is the only liveness signal.
    pub fn is_up(&self) -> bool {
        !data_is_missing(&self.cpu_usage_percent)
    }

    /// Splits `price_per_hour` between CPU and memory.
    ///
    /// Returns `None` when the price is unknown or the latest CPU capacity or memory
    /// total is missing or not finite. `None` means "cost unknown", never "free".
    pub fn price_breakdown(&self) -> Option<NodePriceBreakdown> {
        if self.price_per_hour == 0.0 {
            return None;
        }
        let cores = self.cpu_capacity.last();
        let ram = self.memory_total_bytes.last();
        if is_nan(cores) || is_nan(ram) {
            debug!(
                machine_id = %self.machine_id,
                reason = "capacity unknown",
                "price breakdown undefined"
            );
            return None;
        }
        if !cores.is_finite() || !ram.is_finite() {
            debug!(
                machine_id = %self.machine_id,
                cores,
                ram,
                reason = "non-finite capacity",
                "price breakdown undefined"
            );
            return None;
        }
        let ram_gb = ram / BYTES_PER_GB;
        let units = cores + ram_gb;
        if units <= 0.0 {
            debug!(
                machine_id = %self.machine_id,
                cores,
                ram_gb,
                reason = "no capacity",
                "price breakdown undefined"
            );
            return None;
        }
        // 1 GB of memory costs the same as 1 vCPU
        let per_unit = self.price_per_hour / units;
        if !per_unit.is_finite() {
            debug!(
                machine_id = %self.machine_id,
                price_per_hour = self.price_per_hour,
                reason = "non-finite unit price",
                "price breakdown undefined"
            );
            return None;
        }
        Some(NodePriceBreakdown {
            cpu_per_core: per_unit,
            memory_per_byte: per_unit / BYTES_PER_GB,
            costs: Costs {
                cpu_usage_per_hour: per_unit * cores,
                memory_usage_per_hour: per_unit * ram_gb,
            },
        })
    }

    /// Stats for `device`, inserted empty on first use.
    pub fn disk_mut(&mut self, device: &str) -> &mut DiskStats {
        self.disks.entry(device.to_string()).or_default()
    }

    /// Usage series for a CPU mode (user, system, idle, ...), inserted empty on first use.
    pub fn cpu_mode_mut(&mut self, mode: &str) -> &mut TimeSeries {
        self.cpu_usage_by_mode.entry(mode.to_string()).or_default()
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceStats> {
        self.net_interfaces.iter().find(|i| i.name == name)
    }

    /// Interface `name`; appended after the known ones when first seen.
    pub fn interface_mut(&mut self, name: &str) -> &mut InterfaceStats {
        let idx = match self.net_interfaces.iter().position(|i| i.name == name) {
            Some(idx) => idx,
            None => {
                self.net_interfaces.push(InterfaceStats::new(name));
                self.net_interfaces.len() - 1
            }
        };
        &mut self.net_interfaces[idx]
    }

    pub fn instances(&self) -> &[InstanceId] {
        &self.instances
    }

    pub fn add_instance(&mut self, id: InstanceId) {
        if !self.instances.contains(&id) {
            self.instances.push(id);
        }
    }
}
