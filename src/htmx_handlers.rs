// src/htmx_handlers.rs

use axum::{
    Form,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use maud::Markup;

use crate::{
    errors::AppError, models::ProductId, response::build_response, state::AppState,
    views::render_admin_panel,
};

async fn render_current_panel(app_state: &AppState) -> Markup {
    let snapshot = app_state.admin_page.snapshot().await;
    render_admin_panel(&snapshot)
}

// Pola z formularza zakodowanego jako x-www-form-urlencoded, w kolejności wysłania.
async fn apply_posted_fields(
    app_state: &AppState,
    fields: Vec<(String, String)>,
) -> Result<(), AppError> {
    for (name, value) in fields {
        app_state
            .admin_page
            .change_field_by_name(&name, value)
            .await?;
    }
    Ok(())
}

/// GET / oraz GET /admin: montuje stronę (pobiera bieżącą stronę listy) i ją renderuje.
pub async fn admin_page_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    tracing::info!("Obsłużono zapytanie GET /admin");
    app_state.admin_page.mount().await;
    build_response(&headers, render_current_panel(&app_state).await)
}

/// Zmiana pojedynczego pola (hx-trigger="change"); nic nie podmieniamy.
pub async fn change_fields_htmx_handler(
    State(app_state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<StatusCode, AppError> {
    apply_posted_fields(&app_state, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn submit_form_htmx_handler(
    State(app_state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Markup, AppError> {
    tracing::info!("Obsłużono zapytanie POST /admin/submit");
    apply_posted_fields(&app_state, fields).await?;
    app_state.admin_page.submit().await;
    Ok(render_current_panel(&app_state).await)
}

pub async fn reset_form_htmx_handler(State(app_state): State<AppState>) -> Markup {
    app_state.admin_page.reset_form().await;
    render_current_panel(&app_state).await
}

pub async fn edit_product_htmx_handler(
    State(app_state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Markup, AppError> {
    app_state
        .admin_page
        .edit_product(ProductId(product_id))
        .await?;
    Ok(render_current_panel(&app_state).await)
}

pub async fn delete_product_htmx_handler(
    State(app_state): State<AppState>,
    Path(product_id): Path<String>,
) -> Markup {
    tracing::info!("Obsłużono zapytanie usunięcia produktu o ID: {}", product_id);
    app_state
        .admin_page
        .delete_product(&ProductId(product_id))
        .await;
    render_current_panel(&app_state).await
}

pub async fn go_to_page_htmx_handler(
    State(app_state): State<AppState>,
    Path(page): Path<u32>,
) -> Markup {
    app_state.admin_page.go_to_page(page).await;
    render_current_panel(&app_state).await
}

pub async fn previous_page_htmx_handler(State(app_state): State<AppState>) -> Markup {
    if app_state.admin_page.previous_page().await.is_none() {
        tracing::debug!("Przycisk Previous nieaktywny, pomijam");
    }
    render_current_panel(&app_state).await
}

pub async fn next_page_htmx_handler(State(app_state): State<AppState>) -> Markup {
    if app_state.admin_page.next_page().await.is_none() {
        tracing::debug!("Przycisk Next nieaktywny, pomijam");
    }
    render_current_panel(&app_state).await
}
