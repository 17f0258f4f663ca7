//! Greeting page handler.

use axum::response::Html;

/// Fixed HTML fragment served on the root path.
pub const GREETING_HTML: &str = "<p>Hello, World!</p>";

/// Root handler.
///
/// Returns the static greeting regardless of headers or prior requests.
pub async fn index() -> Html<&'static str> {
    Html(GREETING_HTML)
}
