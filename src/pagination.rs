// src/pagination.rs
use crate::models::ProductsPage;

/// Stały rozmiar strony listy produktów.
pub const PRODUCTS_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_products: u64,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_products: 0,
            total_pages: 0,
        }
    }
}

impl PaginationState {
    /// Ostatnia strona, na którą można przejść (co najmniej 1, także dla pustej listy).
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn is_previous_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_next_disabled(&self) -> bool {
        self.current_page >= self.last_page()
    }

    pub fn previous_page(&self) -> Option<u32> {
        (!self.is_previous_disabled()).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (!self.is_next_disabled()).then(|| self.current_page + 1)
    }

    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }

    /// Przepisuje metadane paginacji z odpowiedzi backendu.
    /// Backend jest autorytatywny także dla numeru bieżącej strony.
    pub fn apply_server_page(&mut self, page: &ProductsPage) {
        self.total_products = page.total_products;
        self.total_pages = page.total_pages;
        self.current_page = page.current_page.clamp(1, self.last_page());
    }
}
