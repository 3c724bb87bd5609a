// src/state.rs

use std::sync::Arc;

use crate::admin_page::AdminPage;

/// Jeden panel na proces: wszyscy operatorzy widzą i zmieniają ten sam
/// formularz i tę samą stronę listy (narzędzie wewnętrzne, bez sesji).
#[derive(Clone)]
pub struct AppState {
    pub admin_page: Arc<AdminPage>,
}
