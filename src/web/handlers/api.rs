//! API endpoint handlers

use crate::state::AppState;
use crate::types::{ChatRequest, ChatResponse, ErrorResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Handle one chat exchange: forward the full history verbatim to the
/// upstream completion API and return its first choice as the reply.
///
/// Single blocking round trip. Failures of any shape collapse to a generic
/// 500; the actual reason only reaches the server log.
pub async fn exchange(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    tracing::debug!("Forwarding {} turns upstream", request.messages.len());

    match state.upstream.complete(&request.messages).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply: Some(reply) })).into_response(),
        Err(err) => {
            tracing::error!("Upstream exchange failed: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch response".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, UpstreamConfig};
    use crate::state::AppState;
    use crate::web::server::create_app;
    use axum::http::StatusCode as AxumStatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Upstream stand-in that echoes the last forwarded message.
    fn echoing_upstream() -> Router {
        Router::new().route(
            "/chat/completions",
            post(|Json(body): Json<Value>| async move {
                let last = body["messages"]
                    .as_array()
                    .and_then(|messages| messages.last())
                    .and_then(|message| message["content"].as_str())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({"choices": [
                    {"message": {"role": "assistant", "content": format!("ECHO:{last}")}},
                ]}))
            }),
        )
    }

    async fn spawn_proxy(upstream_base: String) -> String {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            upstream: UpstreamConfig {
                api_key: "test-key".to_string(),
                base_url: upstream_base,
                model: "gpt-4o-mini".to_string(),
            },
        };
        let state = AppState::new(config).unwrap();
        serve(create_app(state)).await
    }

    #[tokio::test]
    async fn proxy_returns_the_first_choice_as_reply() {
        let upstream = serve(echoing_upstream()).await;
        let proxy = spawn_proxy(upstream).await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{proxy}/api/chat"))
            .json(&json!({"messages": [{"role": "user", "content": "hello"}]}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"reply": {"role": "assistant", "content": "ECHO:hello"}})
        );
    }

    #[tokio::test]
    async fn upstream_failure_collapses_to_generic_500() {
        let upstream = serve(Router::new().route(
            "/chat/completions",
            post(|| async { (AxumStatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let proxy = spawn_proxy(upstream).await;

        let response = reqwest::Client::new()
            .post(format!("{proxy}/api/chat"))
            .json(&json!({"messages": [{"role": "user", "content": "hello"}]}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch response"}));
    }

    #[tokio::test]
    async fn zero_choices_collapses_to_generic_500() {
        let upstream = serve(Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        ))
        .await;
        let proxy = spawn_proxy(upstream).await;

        let response = reqwest::Client::new()
            .post(format!("{proxy}/api/chat"))
            .json(&json!({"messages": [{"role": "user", "content": "hello"}]}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch response"}));
    }

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let upstream = serve(echoing_upstream()).await;
        let proxy = spawn_proxy(upstream).await;

        let response = reqwest::get(format!("{proxy}/health")).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "palaver");
    }

    #[tokio::test]
    async fn pages_render_for_every_variant() {
        let upstream = serve(echoing_upstream()).await;
        let proxy = spawn_proxy(upstream).await;

        for path in ["/", "/classic", "/paper"] {
            let response = reqwest::get(format!("{proxy}{path}")).await.unwrap();
            assert_eq!(response.status(), 200, "variant {path}");
            let body = response.text().await.unwrap();
            assert!(body.contains("chat-form"), "variant {path}");
        }
    }
}
