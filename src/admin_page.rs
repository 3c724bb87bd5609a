// src/admin_page.rs

use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api_client::ProductApi;
use crate::errors::AppError;
use crate::models::{FormData, ProductField, ProductId};
use crate::pagination::PRODUCTS_PER_PAGE;
use crate::store::{AdminAction, AdminState, Reduced, reduce};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { current_page: u32 },
    StaleDiscarded,
    Failed,
}

/// Wynik operacji zapisu; interfejs renderuje się tak samo w obu przypadkach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Succeeded,
    Failed,
}

/// Kontroler strony administracyjnej: pobieranie listy, formularz i zapisy.
///
/// Jedna instancja obsługuje wszystkie przeglądarki: stan panelu (formularz,
/// tryb edycji, bieżąca strona) jest wspólny dla całego procesu.
///
/// Blokada stanu nigdy nie jest trzymana w trakcie żądania do backendu.
pub struct AdminPage {
    api: Arc<dyn ProductApi>,
    state: Mutex<AdminState>,
}

impl AdminPage {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            state: Mutex::new(AdminState::default()),
        }
    }

    pub async fn snapshot(&self) -> AdminState {
        self.state.lock().await.clone()
    }

    async fn dispatch(&self, action: AdminAction) -> Reduced {
        let mut state = self.state.lock().await;
        reduce(&mut state, action)
    }

    /// Pierwsze wyświetlenie strony: pobiera bieżącą stronę listy.
    pub async fn mount(&self) -> FetchOutcome {
        self.refresh_current_page().await
    }

    /// Pobiera wskazaną stronę, dokładnie jednym żądaniem. Numer strony z
    /// odpowiedzi jest tylko przycinany do zakresu `[1, total_pages]`.
    pub async fn fetch_products(&self, page: u32) -> FetchOutcome {
        let requested = self.request_page(page).await;
        self.load_page(requested).await
    }

    async fn request_page(&self, page: u32) -> u32 {
        let mut state = self.state.lock().await;
        reduce(&mut state, AdminAction::PageRequested(page));
        state.latest_requested_page
    }

    async fn load_page(&self, requested_page: u32) -> FetchOutcome {
        match self.api.list_products(requested_page, PRODUCTS_PER_PAGE).await {
            Ok(page) => {
                let current_page = page.current_page;
                match self
                    .dispatch(AdminAction::PageLoaded {
                        requested_page,
                        page,
                    })
                    .await
                {
                    Reduced::Applied => {
                        let state = self.state.lock().await;
                        tracing::info!(
                            "Pobrano stronę {} z {} ({} produktów łącznie)",
                            state.pagination.current_page,
                            state.pagination.total_pages,
                            state.pagination.total_products
                        );
                        FetchOutcome::Loaded {
                            current_page: state.pagination.current_page,
                        }
                    }
                    Reduced::StaleDiscarded => {
                        tracing::debug!(
                            "Odrzucono nieaktualną odpowiedź dla strony {} (backend: {})",
                            requested_page,
                            current_page
                        );
                        FetchOutcome::StaleDiscarded
                    }
                }
            }
            Err(e) => {
                tracing::error!("Error fetching products (strona {}): {}", requested_page, e);
                FetchOutcome::Failed
            }
        }
    }

    pub async fn refresh_current_page(&self) -> FetchOutcome {
        let current_page = self.state.lock().await.pagination.current_page;
        self.fetch_products(current_page).await
    }

    pub async fn go_to_page(&self, page: u32) -> FetchOutcome {
        self.fetch_products(page).await
    }

    /// `None`, gdy przycisk "Previous" jest nieaktywny.
    pub async fn previous_page(&self) -> Option<FetchOutcome> {
        let target = self.state.lock().await.pagination.previous_page()?;
        Some(self.fetch_products(target).await)
    }

    /// `None`, gdy przycisk "Next" jest nieaktywny.
    pub async fn next_page(&self) -> Option<FetchOutcome> {
        let target = self.state.lock().await.pagination.next_page()?;
        Some(self.fetch_products(target).await)
    }

    pub async fn change_field(&self, field: ProductField, value: String) {
        self.dispatch(AdminAction::FieldChanged { field, value }).await;
    }

    pub async fn change_field_by_name(&self, name: &str, value: String) -> Result<(), AppError> {
        let field = ProductField::from_str(name).map_err(|_| {
            tracing::warn!("Odebrano nieznane pole formularza '{}'", name);
            AppError::BadRequest(format!("Nieznane pole formularza: {}", name))
        })?;
        self.change_field(field, value).await;
        Ok(())
    }

    /// Przełącza formularz w tryb edycji wyświetlanego produktu.
    pub async fn edit_product(&self, id: ProductId) -> Result<(), AppError> {
        tracing::info!("Edycja produktu o ID: {}", id);
        let mut state = self.state.lock().await;
        let product = state.find_product(&id).cloned().ok_or_else(|| {
            AppError::NotFound(format!("Produkt {} nie jest wyświetlany na bieżącej stronie", id))
        })?;
        reduce(&mut state, AdminAction::EditRequested(product));
        Ok(())
    }

    pub async fn reset_form(&self) {
        self.dispatch(AdminAction::FormReset).await;
    }

    /// Wysyła formularz: aktualizacja, gdy ustawiono edytowany produkt, w przeciwnym
    /// razie utworzenie. Potem zawsze czyści formularz i odświeża bieżącą stronę,
    /// niezależnie od wyniku zapisu.
    pub async fn submit(&self) -> MutationOutcome {
        let (form, editing_id) = {
            let state = self.state.lock().await;
            (state.form.clone(), state.editing_id.clone())
        };

        let outcome = match editing_id {
            Some(id) => self.update_product(&id, &form).await,
            None => self.create_product(&form).await,
        };

        self.reset_form().await;
        self.refresh_current_page().await;
        outcome
    }

    async fn create_product(&self, form: &FormData) -> MutationOutcome {
        match self.api.create_product(form).await {
            Ok(()) => {
                tracing::info!("Utworzono produkt '{}'", form.name);
                MutationOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!("Error adding product: {}", e);
                MutationOutcome::Failed
            }
        }
    }

    async fn update_product(&self, id: &ProductId, form: &FormData) -> MutationOutcome {
        match self.api.update_product(id, form).await {
            Ok(()) => {
                tracing::info!("Zaktualizowano produkt o ID: {}", id);
                MutationOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!("Error updating product {}: {}", id, e);
                MutationOutcome::Failed
            }
        }
    }

    /// Usuwa produkt; po sukcesie odświeża bieżącą stronę, po błędzie tylko loguje.
    pub async fn delete_product(&self, id: &ProductId) -> MutationOutcome {
        match self.api.delete_product(id).await {
            Ok(()) => {
                tracing::info!("Usunięto produkt o ID: {}", id);
                self.refresh_current_page().await;
                MutationOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!("Error deleting product {}: {}", id, e);
                MutationOutcome::Failed
            }
        }
    }
}
