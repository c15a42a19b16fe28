// Latest observed value of a descriptive label (name, region, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timeseries::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelLastValue {
    #[serde(default)]
    value: String,
    #[serde(default)]
    time: Option<Timestamp>,
}

impl LabelLastValue {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Time of the observation that produced `value`; `None` until the first update.
    pub fn time(&self) -> Option<Timestamp> {
        self.time
    }

    /// Keeps the newest observation. On equal times the later call wins.
    pub fn update(&mut self, value: impl Into<String>, t: Timestamp) {
        if self.time.is_some_and(|prev| t < prev) {
            return;
        }
        self.value = value.into();
        self.time = Some(t);
    }
}

impl fmt::Display for LabelLastValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
