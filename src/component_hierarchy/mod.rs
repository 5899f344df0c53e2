/// Domain layer of the component hierarchy engine.
///
/// Pure data types and side-effect-free services; no I/O lives here.
pub mod domain;
pub mod services;
