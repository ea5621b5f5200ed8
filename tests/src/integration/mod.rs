//! Cross-crate integration flows.

pub mod broadcast_flows;
pub mod iterator_flows;
