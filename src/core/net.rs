use crate::core::{EsgError, wire::Envelope};
use serde::de::DeserializeOwned;

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, EsgError> {
    let text = resp.text().await?;
    #[cfg(feature = "tracing")]
    tracing::debug!(endpoint, bytes = text.len(), "response body received");
    #[cfg(not(feature = "tracing"))]
    let _ = endpoint;
    Ok(text)
}

/// Turns a non-2xx response into [`EsgError::Status`], keeping the server's message if it sent one.
pub(crate) async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, EsgError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(EsgError::Status {
        status: status.as_u16(),
        url,
        message: error_message(&body),
    })
}

/// Pulls a human-readable message out of an error body such as
/// `{"message": "..."}`, `{"error": "..."}` or `{"detail": "..."}`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error", "detail", "msg"]
        .iter()
        .find_map(|key| match value.get(*key) {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(serde_json::Value::Object(inner)) => inner
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            _ => None,
        })
}

/// Parses a response document, accepting both bare and `{ "data": ... }` wrapped bodies.
pub(crate) fn parse_document<T: DeserializeOwned>(text: &str, what: &str) -> Result<T, EsgError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(Envelope::into_inner)
        .map_err(|e| EsgError::Data(format!("{what} json parse: {e}")))
}
