/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interface the UI layer (or the CLI) uses
/// to drive a component session.
pub mod component_session_port;

pub use component_session_port::ComponentSessionPort;
