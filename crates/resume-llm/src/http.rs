//! Request path shared by the HTTP providers.

use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use resume_core::error::{ResumeError, ResumeResult};

/// POST `request` as JSON and return the response body.
///
/// Unsuccessful statuses become errors through
/// [`ResumeError::from_http_status`], using `error_message` to pull the
/// provider's message out of the body. A `Retry-After` header (in seconds)
/// is kept on rate-limit errors.
pub(crate) async fn post_json<R: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    request: &R,
    provider: &str,
    error_message: fn(&str) -> Option<String>,
) -> ResumeResult<String> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| transport_error(provider, e))?;

    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response
        .text()
        .await
        .map_err(|e| transport_error(provider, e))?;

    debug!(provider, status = status.as_u16(), bytes = body.len(), "Completion response");

    if !status.is_success() {
        let message = error_message(&body).unwrap_or(body);
        return Err(ResumeError::from_http_status(
            status.as_u16(),
            &format!("{} API error: {}", provider, message),
        )
        .with_retry_after(retry_after));
    }

    Ok(body)
}

fn transport_error(provider: &str, err: reqwest::Error) -> ResumeError {
    if err.is_timeout() {
        ResumeError::timeout(format!("{} API request timed out", provider), err)
    } else {
        ResumeError::network(format!("{} API request failed", provider), err)
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{response, serve, stall};
    use super::*;
    use resume_core::ErrorCode;
    use serde_json::json;

    fn message_field(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .pointer("/error/message")?
            .as_str()
            .map(str::to_string)
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let server = serve(vec![response(200, &[], r#"{"ok": true}"#)]).await;
        let client = Client::new();

        let body = post_json(
            &client,
            &format!("{}/v1/messages", server.url),
            &json!({"prompt": "hi"}),
            "Test",
            message_field,
        )
        .await
        .unwrap();

        assert_eq!(body, r#"{"ok": true}"#);
        let requests = server.requests();
        assert!(requests[0].starts_with("POST /v1/messages HTTP/1.1"));
        assert!(requests[0].ends_with(r#"{"prompt":"hi"}"#));
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_retry_after() {
        let server = serve(vec![response(
            429,
            &[("retry-after", "12")],
            r#"{"error": {"message": "quota exhausted"}}"#,
        )])
        .await;

        let err = post_json(&Client::new(), &server.url, &json!({}), "Test", message_field)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::RateLimitExceeded);
        assert_eq!(err.retry_after(), Some(12));
        assert!(err.to_string().contains("Test API error: quota exhausted"));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_client_error_uses_raw_body_when_unparseable() {
        let server = serve(vec![response(400, &[], "plain text failure")]).await;

        let err = post_json(&Client::new(), &server.url, &json!({}), "Test", message_field)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::LlmGenerationFailed);
        assert!(err.to_string().contains("plain text failure"));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_timeout_maps_to_net_timeout() {
        let url = stall().await;
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(200))
            .build()
            .unwrap();

        let err = post_json(&client, &url, &json!({}), "Test", message_field)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NetTimeout);
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = post_json(&Client::new(), &url, &json!({}), "Test", message_field)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NetConnectionFailed);
        assert!(err.to_string().contains("Test API request failed"));
    }
}
