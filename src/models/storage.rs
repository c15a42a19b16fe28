// Per-device disk metrics

use serde::{Deserialize, Serialize};

use crate::timeseries::TimeSeries;

/// Derived metrics for one block device. The owning node keys it by device name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskStats {
    pub io_utilization_percent: TimeSeries,
    pub read_ops: TimeSeries,
    pub write_ops: TimeSeries,
    pub written_bytes: TimeSeries,
    pub read_bytes: TimeSeries,
    pub read_time: TimeSeries,
    pub write_time: TimeSeries,
    /// Time requests spent queued.
    pub wait: TimeSeries,
    /// Average wait per completed operation.
    #[serde(rename = "await")]
    pub await_: TimeSeries,
}
