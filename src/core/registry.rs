use crate::core::RiskReport;
use crate::utils::error::{ReportError, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;

/// Outcome of a registry sync, for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Created,
    Updated,
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncOutcome::Created => write!(f, "created"),
            SyncOutcome::Updated => write!(f, "updated"),
        }
    }
}

/// Client for the registry REST endpoint.
///
/// Every non-success status maps to the one `RegistryError` signal; the
/// caller gets no finer-grained taxonomy and no retry.
pub struct RegistryClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl RegistryClient {
    pub fn new(endpoint: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/packages", self.endpoint)
    }

    fn record_url(&self, record_id: &str) -> String {
        format!("{}/packages/{}", self.endpoint, record_id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET the existing record. `None` when the registry has no record for
    /// this (package, level) pair yet.
    pub async fn fetch_record(&self, record_id: &str) -> Result<Option<serde_json::Value>> {
        let url = self.record_url(record_id);
        tracing::debug!("GET {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        let status = response.status();
        tracing::debug!("Registry response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ReportError::RegistryError {
                status: status.as_u16(),
            });
        }

        Ok(Some(response.json().await?))
    }

    pub async fn update_record(&self, record_id: &str, report: &RiskReport) -> Result<()> {
        let url = self.record_url(record_id);
        tracing::debug!("PUT {}", url);

        let response = self
            .authorize(self.client.put(&url))
            .json(report)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::RegistryError {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    pub async fn create_record(&self, report: &RiskReport) -> Result<()> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);

        let response = self
            .authorize(self.client.post(&url))
            .json(report)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::RegistryError {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// GET the record, then PUT to update it or POST to create it.
    pub async fn sync(&self, record_id: &str, report: &RiskReport) -> Result<SyncOutcome> {
        match self.fetch_record(record_id).await? {
            Some(_) => {
                self.update_record(record_id, report).await?;
                Ok(SyncOutcome::Updated)
            }
            None => {
                self.create_record(report).await?;
                Ok(SyncOutcome::Created)
            }
        }
    }
}
