/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the fleet API and JSON
/// snapshots as component sources, console progress, and report rendering.
pub mod outbound;
