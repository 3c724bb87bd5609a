// src/response.rs

use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use maud::Markup;

use crate::views::render_full_page;

/// Dla żądań htmx zwraca sam fragment, dla pełnych odświeżeń (F5) całą stronę.
pub fn build_response(headers: &HeaderMap, page_content: Markup) -> Response {
    if headers.contains_key("HX-Request") {
        page_content.into_response()
    } else {
        render_full_page(page_content).into_response()
    }
}
