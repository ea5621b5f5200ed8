//! Ports Layer - Trait definitions
//!
//! - `ObjectSerializer`: driving port used by the communication layer

pub mod inbound;

pub use inbound::ObjectSerializer;
