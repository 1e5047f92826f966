// HTTP client for the hosted assistant service (direct REST, no SDK)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart;

use crate::error::{AssistantError, Result};
use crate::service::AssistantService;
use crate::types::{FileObject, MessageList, MessageObject, Run, Thread};

const ASSISTANT_API_BASE: &str = "https://api.openai.com/v1";

/// The threads/runs surface is still versioned behind a beta header.
const BETA_HEADER: &str = "assistants=v2";

pub struct AssistantClient {
    http: reqwest::Client,
    base_url: String,
    assistant_id: String,
}

impl AssistantClient {
    /// Create a new client with an API key and the pre-provisioned
    /// assistant identifier that drives every run.
    pub fn new(api_key: impl Into<String>, assistant_id: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| AssistantError::InvalidApiKey)?,
        );
        headers.insert(
            HeaderName::from_static("openai-beta"),
            HeaderValue::from_static(BETA_HEADER),
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: ASSISTANT_API_BASE.to_string(),
            assistant_id: assistant_id.into(),
        })
    }

    /// Override the service base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(AssistantError::Api { status, message })
}

#[async_trait]
impl AssistantService for AssistantClient {
    async fn create_thread(&self) -> Result<Thread> {
        tracing::debug!("creating thread");
        let response = self
            .http
            .post(format!("{}/threads", self.base_url))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn add_user_message(&self, thread_id: &str, content: &str) -> Result<MessageObject> {
        let response = self
            .http
            .post(format!("{}/threads/{}/messages", self.base_url, thread_id))
            .json(&serde_json::json!({
                "role": "user",
                "content": content,
            }))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn create_run(&self, thread_id: &str) -> Result<Run> {
        tracing::debug!(thread_id, assistant_id = %self.assistant_id, "starting run");
        let response = self
            .http
            .post(format!("{}/threads/{}/runs", self.base_url, thread_id))
            .json(&serde_json::json!({
                "assistant_id": self.assistant_id,
            }))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let response = self
            .http
            .get(format!(
                "{}/threads/{}/runs/{}",
                self.base_url, thread_id, run_id
            ))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList> {
        let response = self
            .http
            .get(format!("{}/threads/{}/messages", self.base_url, thread_id))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<FileObject> {
        tracing::debug!(file_name, size = bytes.len(), "uploading file");
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .text("purpose", "assistants")
            .part("file", part);

        let response = self
            .http
            .post(format!("{}/files", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }
}
