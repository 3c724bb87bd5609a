// src/store.rs
//
// Jedyny stan strony administracyjnej i reduktor, który go zmienia.
// Każda zmiana stanu przechodzi przez `reduce`.

use crate::models::{FormData, Product, ProductField, ProductId, ProductsPage};
use crate::pagination::PaginationState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub form: FormData,
    /// `None` => kolejne wysłanie formularza tworzy produkt, `Some(id)` => aktualizuje `id`.
    pub editing_id: Option<ProductId>,
    pub products: Vec<Product>,
    pub pagination: PaginationState,
    /// Numer strony z ostatniego wysłanego żądania listy (0 = jeszcze żadnego).
    pub latest_requested_page: u32,
}

impl AdminState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    FieldChanged { field: ProductField, value: String },
    /// Produkt wyszukany wcześniej na bieżącej stronie (`AdminState::find_product`).
    EditRequested(Product),
    FormReset,
    PageRequested(u32),
    PageLoaded { requested_page: u32, page: ProductsPage },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduced {
    Applied,
    /// Odpowiedź dotyczyła strony, która nie jest już ostatnio żądaną.
    StaleDiscarded,
}

pub fn reduce(state: &mut AdminState, action: AdminAction) -> Reduced {
    match action {
        AdminAction::FieldChanged { field, value } => {
            state.form.set(field, value);
        }
        AdminAction::EditRequested(product) => {
            state.form = FormData::from(&product);
            state.editing_id = Some(product.id);
        }
        AdminAction::FormReset => {
            state.form = FormData::default();
            state.editing_id = None;
        }
        AdminAction::PageRequested(page) => {
            let page = state.pagination.clamp_page(page);
            state.pagination.current_page = page;
            state.latest_requested_page = page;
        }
        AdminAction::PageLoaded {
            requested_page,
            page,
        } => {
            if requested_page != state.latest_requested_page {
                return Reduced::StaleDiscarded;
            }
            state.pagination.apply_server_page(&page);
            state.products = page.products;
        }
    }
    Reduced::Applied
}
