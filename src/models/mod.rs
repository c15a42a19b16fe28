// Node domain models

mod costs;
mod label;
mod network;
mod node;
mod storage;

pub use costs::{Costs, NodePriceBreakdown};
pub use label::LabelLastValue;
pub use network::InterfaceStats;
pub use node::{InstanceId, Node};
pub use storage::DiskStats;
