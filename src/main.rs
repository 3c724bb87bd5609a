// src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Deklaracje modułów
mod admin_page; // dla src/admin_page.rs
mod api_client; // dla src/api_client.rs
mod config; // dla src/config.rs
mod errors; // dla src/errors.rs
mod htmx_handlers;
mod models; // dla src/models.rs
mod pagination; // dla src/pagination.rs
mod response;
mod state; // dla src/state.rs
mod store; // dla src/store.rs
#[cfg(test)]
mod test_support;
mod views;

// Importy z własnych modułów
use crate::admin_page::AdminPage;
use crate::api_client::RestProductApi;
use crate::config::AppConfig;
use crate::htmx_handlers::*;
use crate::state::AppState;

fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(admin_page_handler))
        .route("/admin", get(admin_page_handler))
        .route("/admin/fields", post(change_fields_htmx_handler))
        .route("/admin/submit", post(submit_form_htmx_handler))
        .route("/admin/reset", post(reset_form_htmx_handler))
        .route("/admin/edit/{product_id}", post(edit_product_htmx_handler))
        .route(
            "/admin/delete/{product_id}",
            post(delete_product_htmx_handler),
        )
        .route("/admin/page/previous", post(previous_page_htmx_handler))
        .route("/admin/page/next", post(next_page_htmx_handler))
        .route("/admin/page/{page}", post(go_to_page_htmx_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Inicjalizacja systemu logowania (tracing)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_admin_panel=debug,tower_http=debug".into()), // np. RUST_LOG=info cargo run
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Inicjalizacja panelu administracyjnego...");

    // --- Konfiguracja ---
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Błędna konfiguracja: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Backend produktów: {}", config.api_url);

    // --- Klient backendu ---
    let api = match RestProductApi::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Nie można utworzyć klienta HTTP: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState {
        admin_page: Arc::new(AdminPage::new(Arc::new(api))),
    };
    let app = app_router(app_state);

    tracing::info!("Serwer nasłuchuje na {}", config.bind_addr);

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Nie można powiązać adresu {}: {}", config.bind_addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Błąd serwera: {}", e);
    }
}
