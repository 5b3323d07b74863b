use async_trait::async_trait;
use jaeger_types::ServiceList;
use reqwest::header::AUTHORIZATION;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

/// Backend calls the trace-search actions depend on.
#[async_trait]
pub trait ServicesApi: Send + Sync {
    /// List the services of `namespace`. `auth` is a full `Authorization`
    /// header value.
    async fn get_services(&self, auth: &str, namespace: &str) -> Result<ServiceList, ApiError>;
}

/// `ServicesApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    api_base: String,
}

impl HttpApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ServicesApi for HttpApi {
    async fn get_services(&self, auth: &str, namespace: &str) -> Result<ServiceList, ApiError> {
        let url = format!("{}/api/namespaces/{}/services", self.api_base, namespace);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<ServiceList>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
