/// Type alias for Result with anyhow::Error as the error type.
/// Ports, adapters and the CLI share this alias so errors propagate with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
