//! HTTP client for the Marvel public API
//!
//! `GET {base_url}/v1/public/characters?limit=..&ts=..&apikey=..&hash=..`
//! where `hash = md5(ts + private_key + public_key)` in lowercase hex.

use std::time::Duration;

use async_trait::async_trait;
use md5::{Digest, Md5};
use tracing::{debug, info};
use url::Url;

use super::types::{CharacterDataWrapper, RawCharacter};
use super::CharacterSource;
use crate::config::{AppConfig, Credentials};
use crate::constants::api::CHARACTERS_PATH;
use crate::error::CatalogError;

/// Authentication token for one request
pub fn request_signature(ts: i64, credentials: &Credentials) -> String {
    let mut hasher = Md5::new();
    hasher.update(ts.to_string().as_bytes());
    hasher.update(credentials.private_key.as_bytes());
    hasher.update(credentials.public_key.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone)]
pub struct MarvelClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl MarvelClient {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let credentials = config.credentials()?;
        let base_url = config.api_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    fn characters_url(&self) -> Result<Url, CatalogError> {
        self.base_url.join(CHARACTERS_PATH).map_err(|e| {
            CatalogError::Config(crate::config::ConfigError::InvalidUrl(
                self.base_url.to_string(),
                e.to_string(),
            ))
        })
    }
}

#[async_trait]
impl CharacterSource for MarvelClient {
    async fn fetch_characters(&self, limit: usize) -> Result<Vec<RawCharacter>, CatalogError> {
        let endpoint = "GET /v1/public/characters";
        let url = self.characters_url()?;
        let ts = chrono::Utc::now().timestamp_millis();
        let hash = request_signature(ts, &self.credentials);

        debug!(url = %url, limit, ts, "Requesting characters");
        let resp = self
            .http
            .get(url)
            .query(&[
                ("limit", limit.to_string()),
                ("ts", ts.to_string()),
                ("apikey", self.credentials.public_key.clone()),
                ("hash", hash),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let body = resp.text().await.map_err(|e| CatalogError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;
        let wrapper: CharacterDataWrapper = serde_json::from_str(&body).map_err(|e| CatalogError::Parse {
            endpoint: endpoint.into(),
            source: e,
        })?;

        info!(count = wrapper.data.results.len(), "Fetched characters");
        Ok(wrapper.data.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer) -> AppConfig {
        AppConfig {
            base_url: server.uri(),
            public_key: "1234".to_string(),
            private_key: "abcd".to_string(),
            timeout_secs: 5,
            storage_path: None,
        }
    }

    fn record(name: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "description": "",
            "thumbnail": {"path": "http://img/x", "extension": "jpg"},
            "comics": {"available": 1},
            "series": {"available": 2},
            "events": {"available": 3}
        })
    }

    #[test]
    fn test_request_signature_known_vector() {
        let creds = Credentials {
            public_key: "1234".to_string(),
            private_key: "abcd".to_string(),
        };
        assert_eq!(request_signature(1, &creds), "ffd275c5130566a2916217b101f26150");
    }

    #[test]
    fn test_new_requires_credentials() {
        let config = AppConfig::default();
        assert!(matches!(MarvelClient::new(&config), Err(CatalogError::Config(_))));
    }

    #[tokio::test]
    async fn test_fetch_sends_auth_query_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/public/characters"))
            .and(query_param("limit", "10"))
            .and(query_param("apikey", "1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"results": [record("Hulk"), record("Thor")]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MarvelClient::new(&test_config(&server)).unwrap();
        let records = client.fetch_characters(10).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Thor");

        // The hash sent must match the timestamp sent
        let requests = server.received_requests().await.unwrap();
        let pairs: std::collections::HashMap<_, _> = requests[0].url.query_pairs().into_owned().collect();
        let ts: i64 = pairs["ts"].parse().unwrap();
        let creds = client.credentials.clone();
        assert_eq!(pairs["hash"], request_signature(ts, &creds));
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/public/characters"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"code":"InvalidCredentials"}"#))
            .mount(&server)
            .await;

        let client = MarvelClient::new(&test_config(&server)).unwrap();
        match client.fetch_characters(10).await.unwrap_err() {
            CatalogError::Api { status, body, .. } => {
                assert_eq!(status, 401);
                assert!(body.contains("InvalidCredentials"));
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/public/characters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
            .mount(&server)
            .await;

        let client = MarvelClient::new(&test_config(&server)).unwrap();
        assert!(matches!(
            client.fetch_characters(10).await,
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_characters_url_keeps_base_path() {
        let config = AppConfig {
            base_url: "https://proxy.example/marvel".to_string(),
            public_key: "1234".to_string(),
            private_key: "abcd".to_string(),
            ..AppConfig::default()
        };
        let client = MarvelClient::new(&config).unwrap();
        assert_eq!(
            client.characters_url().unwrap().as_str(),
            "https://proxy.example/marvel/v1/public/characters"
        );
    }

    #[tokio::test]
    async fn test_fetch_reports_transport_failure() {
        // Reserve a port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = AppConfig {
            base_url: format!("http://127.0.0.1:{port}"),
            public_key: "1234".to_string(),
            private_key: "abcd".to_string(),
            ..AppConfig::default()
        };
        let client = MarvelClient::new(&config).unwrap();
        assert!(matches!(
            client.fetch_characters(10).await,
            Err(CatalogError::Http { .. })
        ));
    }
}
