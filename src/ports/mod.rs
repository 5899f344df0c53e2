/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports describe what the UI layer may ask of the engine;
/// outbound ports describe what the engine needs from infrastructure.
pub mod inbound;
pub mod outbound;
