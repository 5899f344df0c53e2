use crate::adapters::outbound::component_payload::ComponentPayload;
use crate::component_hierarchy::domain::Component;
use crate::ports::outbound::{AuthHeaderProvider, ComponentRepository};
use crate::shared::security::validate_identifier;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// Connection settings for the fleet component API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl ApiSettings {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }
}

/// HttpComponentRepository adapter fetching a vessel's components from the
/// fleet API
///
/// Issues `GET {base}/components/vessel/{id}` with the configured
/// `Authorization` header. Failed attempts are retried with a linear
/// back-off; the last error is returned once the retries are used up.
pub struct HttpComponentRepository {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    auth: Box<dyn AuthHeaderProvider>,
}

impl HttpComponentRepository {
    pub fn new(settings: ApiSettings, auth: Box<dyn AuthHeaderProvider>) -> Result<Self> {
        let user_agent = format!("fleet-components/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            max_retries: settings.max_retries.max(1),
            auth,
        })
    }

    fn endpoint(&self, vessel_id: &str) -> String {
        format!(
            "{}/components/vessel/{}",
            self.base_url,
            urlencoding::encode(vessel_id)
        )
    }

    fn parse_payload(body: &str) -> Result<Vec<Component>> {
        let components = ComponentPayload::parse(body).context(
            "Component API returned a body that is neither a component list nor {\"data\": [...]}",
        )?;
        Ok(components)
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<Component>> {
        let mut request = self.client.get(url);
        if let Some(header) = self.auth.authorization_header() {
            request = request.header(reqwest::header::AUTHORIZATION, header);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Component API returned status code {}", status);
        }

        let body = response.text().await?;
        Self::parse_payload(&body)
    }
}

#[async_trait]
impl ComponentRepository for HttpComponentRepository {
    async fn fetch_by_vessel(&self, vessel_id: &str) -> Result<Vec<Component>> {
        validate_identifier(vessel_id, "Vessel id")?;
        let url = self.endpoint(vessel_id);

        let mut attempt = 1;
        loop {
            match self.fetch_once(&url).await {
                Ok(components) => return Ok(components),
                Err(e) if attempt >= self.max_retries => {
                    return Err(e.context(format!(
                        "giving up after {} attempt(s)",
                        self.max_retries
                    )))
                }
                Err(_) => {
                    tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::network::StaticTokenProvider;

    fn repository(base_url: &str, max_retries: u32) -> HttpComponentRepository {
        let settings = ApiSettings {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(2),
            max_retries,
        };
        HttpComponentRepository::new(settings, Box::new(StaticTokenProvider::none())).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash_and_encodes_id() {
        let repo = repository("https://fleet.example.com/api/", 1);
        assert_eq!(
            repo.endpoint("V 100"),
            "https://fleet.example.com/api/components/vessel/V%20100"
        );
    }

    #[test]
    fn test_parse_payload_accepts_bare_array() {
        let components = HttpComponentRepository::parse_payload(
            r#"[{"id": 1, "name": "Engine", "isMounted": true}]"#,
        )
        .unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "Engine");
    }

    #[test]
    fn test_parse_payload_accepts_data_wrapper() {
        let components = HttpComponentRepository::parse_payload(
            r#"{"data": [{"id": 1}, {"id": 2, "parentComponentId": 1}]}"#,
        )
        .unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[1].parent_component_id, 1);
    }

    #[test]
    fn test_parse_payload_rejects_other_shapes() {
        let result = HttpComponentRepository::parse_payload(r#"{"items": []}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_rejects_unsafe_vessel_id() {
        let repo = repository("http://127.0.0.1:9", 1);
        let err = repo.fetch_by_vessel("../admin").await.unwrap_err();
        assert!(err.to_string().contains("Vessel id"));
    }

    #[tokio::test]
    async fn test_fetch_reports_unreachable_host() {
        // Port 9 (discard) is not listening on loopback in test environments
        let repo = repository("http://127.0.0.1:9", 2);
        let err = repo.fetch_by_vessel("V-1").await.unwrap_err();
        assert!(format!("{:#}", err).contains("giving up after 2 attempt(s)"));
    }
}
