// Network interface models

use serde::{Deserialize, Serialize};

use crate::timeseries::TimeSeries;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceStats {
    pub name: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub up: TimeSeries,
    #[serde(default)]
    pub rx_bytes: TimeSeries,
    #[serde(default)]
    pub tx_bytes: TimeSeries,
}

impl InterfaceStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
