/// Network adapters for the fleet component API
mod auth_header;
mod component_api_client;

pub use auth_header::{EnvTokenProvider, StaticTokenProvider, TOKEN_ENV_VAR};
pub use component_api_client::{ApiSettings, HttpComponentRepository};
