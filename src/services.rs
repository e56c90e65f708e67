use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[async_trait]
pub trait StoryService: Send + Sync + Debug {
    async fn generate_story(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageService: Send + Sync + Debug {
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}

// --- Story endpoint ---

#[derive(Debug)]
pub struct HttpStoryService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpStoryService {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct StoryRequest<'a> {
    theme: &'a str,
}

#[derive(Deserialize)]
struct StoryResponse {
    story: Option<String>,
}

#[async_trait]
impl StoryService for HttpStoryService {
    async fn generate_story(&self, prompt: &str) -> Result<String> {
        debug!("POST {} ({} byte prompt)", self.endpoint, prompt.len());

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&StoryRequest { theme: prompt })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Story API error ({}): {}", status, error_text));
        }

        let result: StoryResponse = resp.json().await?;
        // A well-formed response without a story field is treated as an
        // empty story, not a failure.
        Ok(result.story.unwrap_or_default())
    }
}

// --- Image endpoint ---

#[derive(Debug)]
pub struct HttpImageService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpImageService {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct ImageResponse {
    image: Option<String>,
}

#[async_trait]
impl ImageService for HttpImageService {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        debug!("POST {} ({} byte prompt)", self.endpoint, prompt.len());

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&ImageRequest { prompt })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Image API error ({}): {}", status, error_text));
        }

        let result: ImageResponse = resp.json().await?;
        Ok(result.image.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_request_body_shape() {
        let body = serde_json::to_value(&StoryRequest {
            theme: "a short prompt",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "theme": "a short prompt" }));
    }

    #[test]
    fn test_image_request_body_shape() {
        let body = serde_json::to_value(&ImageRequest {
            prompt: "Illustration of: a short prompt",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "prompt": "Illustration of: a short prompt" })
        );
    }

    #[test]
    fn test_story_response_parsing_success() {
        let result: StoryResponse =
            serde_json::from_str(r#"{ "story": "Once upon a time..." }"#).unwrap();
        assert_eq!(result.story.as_deref(), Some("Once upon a time..."));
    }

    #[test]
    fn test_story_response_missing_field_is_empty() {
        let result: StoryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(result.story.unwrap_or_default(), "");
    }

    #[test]
    fn test_image_response_parsing() {
        let result: ImageResponse =
            serde_json::from_str(r#"{ "image": "https://x/img.png" }"#).unwrap();
        assert_eq!(result.image.as_deref(), Some("https://x/img.png"));

        let empty: ImageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.image.unwrap_or_default(), "");
    }
}
