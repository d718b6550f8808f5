//! Client for the hosted chat-completion API.
//!
//! The API is an opaque collaborator: fixed model, bearer credentials from
//! configuration, one blocking round trip per exchange. Its first completion
//! choice is the reply; everything else about its protocol is out of scope.

use crate::config::UpstreamConfig;
use crate::types::Turn;
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Turn,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Forward the conversation unmodified and return the first completion
    /// choice. No retry, no timeout override.
    pub async fn complete(&self, messages: &[Turn]) -> Result<Turn> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await
            .context("upstream request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "upstream returned {status}: {}",
                body.chars().take(200).collect::<String>()
            );
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("upstream response was not a completion object")?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| anyhow!("completion contained no choices"))
    }
}
