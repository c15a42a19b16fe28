// Shared test helpers

#![allow(dead_code)]

use nodecost::models::Node;
use nodecost::timeseries::TimeSeries;

pub const STEP: i64 = 15;

pub fn series(values: &[f32]) -> TimeSeries {
    TimeSeries::from_values(0, STEP, values.to_vec()).unwrap()
}

/// Node with a price, one capacity sample each, and live CPU usage.
pub fn priced_node(machine_id: &str, price_per_hour: f32, cores: f32, ram_bytes: f32) -> Node {
    let mut node = Node::new(machine_id);
    node.price_per_hour = price_per_hour;
    node.cpu_capacity = series(&[cores]);
    node.memory_total_bytes = series(&[ram_bytes]);
    node.cpu_usage_percent = series(&[10.0, 12.5, 11.0]);
    node
}
