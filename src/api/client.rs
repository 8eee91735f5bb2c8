// src/api/client.rs
//! HTTP gateway to the resume-tailoring service. One request per call, no
//! retries; every outcome collapses to `Result<T, ApiError>`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, trace};

use crate::api::types::{ErrorBody, ScrapeRequest, ScrapeResult, TailorRequest, TailorResult};
use crate::error::ApiError;

const HEALTH_ENDPOINT: &str = "/health";
const SCRAPE_JOB_ENDPOINT: &str = "/scrape-job";
const TAILOR_RESUME_ENDPOINT: &str = "/tailor-resume";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// The three operations the service exposes. Controllers call through this
/// trait so tests can substitute an in-memory double.
#[async_trait]
pub trait JobTailorApi {
    async fn health(&self) -> Result<serde_json::Value, ApiError>;
    async fn scrape_job(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ApiError>;
    async fn tailor_resume(&self, request: &TailorRequest) -> Result<TailorResult, ApiError>;
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET with no body.
    async fn get_json<R>(&self, endpoint: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        trace!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::read_response(response).await
    }

    /// POST with a JSON body and JSON content type.
    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ApiError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        trace!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::read_response(response).await
    }

    /// Uniform envelope: 2xx parses as typed JSON, anything else becomes an
    /// `ApiError::Http` carrying the server's `{detail}` when one is present.
    async fn read_response<R>(response: reqwest::Response) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(ApiError::from_transport)?;
            return serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()));
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.detail);

        error!("Service returned error status {}", status);
        Err(ApiError::http(status.as_u16(), detail))
    }
}

#[async_trait]
impl JobTailorApi for ApiClient {
    async fn health(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json(HEALTH_ENDPOINT).await
    }

    async fn scrape_job(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ApiError> {
        info!("Scraping job post: {}", request.job_url);
        self.post_json(SCRAPE_JOB_ENDPOINT, request).await
    }

    async fn tailor_resume(&self, request: &TailorRequest) -> Result<TailorResult, ApiError> {
        info!("Calling tailoring service ({} chars)", request.resume.len());
        self.post_json(TAILOR_RESUME_ENDPOINT, request).await
    }
}
