/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod clock;
mod component_payload;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
