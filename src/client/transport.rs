use crate::types::{ChatRequest, ChatResponse, Turn};
use async_trait::async_trait;

/// What one round trip produced, handled exhaustively by the view.
///
/// `Empty` is the reply-arrived-but-unusable case: the conversation keeps
/// its trailing user message and nothing is shown. `Failed` covers
/// transport, server and decode errors alike; the reason only ever reaches
/// the diagnostics log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Reply(Turn),
    Empty,
    Failed(String),
}

impl ReplyOutcome {
    /// Classify a decoded proxy response: a missing reply or blank content
    /// is `Empty`, never an error. The browser pages make the same check.
    pub fn from_response(response: ChatResponse) -> Self {
        match response.reply {
            Some(turn) if !turn.content.is_empty() => ReplyOutcome::Reply(turn),
            _ => ReplyOutcome::Empty,
        }
    }
}

/// The view's seam to the proxy endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn exchange(&self, history: &[Turn]) -> ReplyOutcome;
}

/// Production transport: `POST {base}/api/chat` with the full history.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn exchange(&self, history: &[Turn]) -> ReplyOutcome {
        let request = ChatRequest {
            messages: history.to_vec(),
        };

        let response = match self.http.post(&self.endpoint).json(&request).send().await {
            Ok(response) => response,
            Err(err) => return ReplyOutcome::Failed(err.to_string()),
        };

        if !response.status().is_success() {
            return ReplyOutcome::Failed(format!("server returned {}", response.status()));
        }

        match response.json::<ChatResponse>().await {
            Ok(body) => ReplyOutcome::from_response(body),
            Err(err) => ReplyOutcome::Failed(err.to_string()),
        }
    }
}
