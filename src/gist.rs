use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::{
    get_gist_api_url, user_agent, GITHUB_ACCEPT_HEADER, PLACEHOLDER_DESCRIPTION,
};
use crate::loader::{load_files, FileMap};
use crate::logging::{log_debug, log_error, log_info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistRequest {
    pub files: FileMap,
    pub description: String,
    pub public: bool,
}

impl GistRequest {
    pub fn new(files: FileMap, description: &str, public: bool) -> Self {
        Self {
            files,
            description: normalize_description(description),
            public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GistResponse {
    pub url: String,
    pub html_url: String,
}

pub fn normalize_description(description: &str) -> String {
    if description.trim().is_empty() {
        PLACEHOLDER_DESCRIPTION.to_string()
    } else {
        description.to_string()
    }
}

pub fn decode_response(body: &str) -> Result<GistResponse> {
    serde_json::from_str(body).context("Failed to parse gist API response")
}

pub struct GistClient {
    client: Client,
    endpoint: String,
}

impl GistClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, get_gist_api_url()))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        log_info(&format!("Initializing gist client for {endpoint}"));
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Create a gist from already-loaded files. Exactly one POST, no retry.
    pub async fn publish(
        &self,
        files: FileMap,
        description: &str,
        public: bool,
        token: &str,
    ) -> Result<GistResponse> {
        let request = GistRequest::new(files, description, public);
        let body = serde_json::to_vec(&request).context("Failed to encode gist request")?;

        log_debug(&format!(
            "Posting gist with {} file(s), {} bytes",
            request.files.len(),
            body.len()
        ));

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, GITHUB_ACCEPT_HEADER)
            .header(AUTHORIZATION, format!("token {token}"))
            .header(USER_AGENT, user_agent())
            .body(body)
            .send()
            .await
            .context("Failed to send request to gist API")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read gist API response")?;

        if !status.is_success() {
            log_error(&format!("Gist API error ({status}): {text}"));
            anyhow::bail!("Gist API request failed ({}): {}", status, text);
        }

        let gist = decode_response(&text)?;
        log_info(&format!("Created gist: {}", gist.html_url));
        Ok(gist)
    }

    /// Load `paths` and publish them; loader errors come back unchanged.
    pub async fn publish_paths(
        &self,
        paths: &[String],
        description: &str,
        public: bool,
        token: &str,
    ) -> Result<GistResponse> {
        let files = load_files(paths).await?;
        self.publish(files, description, public, token).await
    }
}
