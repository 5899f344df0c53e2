use crate::ports::outbound::AuthHeaderProvider;

/// Environment variable holding the fleet API token
pub const TOKEN_ENV_VAR: &str = "FLEET_API_TOKEN";

/// Reads a bearer token from `FLEET_API_TOKEN` on every request
///
/// An unset or blank variable means unauthenticated requests.
#[derive(Debug, Default)]
pub struct EnvTokenProvider {
    var_name: Option<String>,
}

impl EnvTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the token from a different variable
    pub fn from_var(var_name: impl Into<String>) -> Self {
        Self {
            var_name: Some(var_name.into()),
        }
    }
}

impl AuthHeaderProvider for EnvTokenProvider {
    fn authorization_header(&self) -> Option<String> {
        let name = self.var_name.as_deref().unwrap_or(TOKEN_ENV_VAR);
        bearer(std::env::var(name).ok()?.as_str())
    }
}

/// Fixed header value, mostly for tests and scripted runs
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn none() -> Self {
        Self { token: None }
    }
}

impl AuthHeaderProvider for StaticTokenProvider {
    fn authorization_header(&self) -> Option<String> {
        bearer(self.token.as_deref()?)
    }
}

fn bearer(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}
