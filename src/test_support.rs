// src/test_support.rs
//
// Backend produktów w pamięci, do testów kontrolera i handlerów.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::api_client::ProductApi;
use crate::errors::ApiError;
use crate::models::{FormData, Product, ProductId, ProductsPage};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List { page: u32, limit: u32 },
    Create { form: FormData },
    Update { id: ProductId, form: FormData },
    Delete { id: ProductId },
}

#[derive(Default)]
pub struct InMemoryProductApi {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<ApiCall>>,
    next_id: AtomicUsize,
    fail_mutations: AtomicBool,
    fail_fetches: AtomicBool,
    /// Odpowiedź dla tej strony czeka na `notify_one()`.
    held_page: Mutex<Option<(u32, Arc<Notify>)>>,
}

fn product_from_form(id: ProductId, form: &FormData) -> Product {
    Product {
        id,
        name: form.name.clone(),
        description: form.description.clone(),
        price: form.price.clone(),
        images: form.images.clone(),
        category: form.category.clone(),
        brand: form.brand.clone(),
        gender: form.gender.clone(),
        discount_price: form.discount_price.clone(),
        product_website_link: form.product_website_link.clone(),
    }
}

fn injected_failure() -> ApiError {
    ApiError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: "wstrzyknięty błąd".to_string(),
    }
}

impl InMemoryProductApi {
    pub fn with_products(count: usize) -> Self {
        let api = Self::default();
        for n in 0..count {
            let form = FormData {
                name: format!("Product {}", n + 1),
                description: format!("Description {}", n + 1),
                price: format!("{}", 10 + n),
                images: format!("https://img.example/{}.jpg", n + 1),
                gender: if n % 2 == 0 { "male" } else { "female" }.to_string(),
                ..FormData::default()
            };
            api.insert(&form);
        }
        api
    }

    fn insert(&self, form: &FormData) {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = ProductId(format!("p{}", n + 1));
        self.products
            .lock()
            .unwrap()
            .push(product_from_form(id, form));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Wstrzymuje odpowiedź na kolejne żądanie listy dla `page`,
    /// dopóki test nie wywoła `notify_one()` na zwróconym sygnale.
    pub fn hold_page(&self, page: u32) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.held_page.lock().unwrap() = Some((page, gate.clone()));
        gate
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ProductApi for InMemoryProductApi {
    async fn list_products(&self, page: u32, limit: u32) -> Result<ProductsPage, ApiError> {
        self.record(ApiCall::List { page, limit });
        let gate = {
            let mut held = self.held_page.lock().unwrap();
            if held.as_ref().is_some_and(|(held_page, _)| *held_page == page) {
                held.take().map(|(_, gate)| gate)
            } else {
                None
            }
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let products = self.products.lock().unwrap();
        let total = products.len() as u64;
        let total_pages = total.div_ceil(u64::from(limit)) as u32;
        let offset = (page.saturating_sub(1) * limit) as usize;
        let page_items = products
            .iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(ProductsPage {
            products: page_items,
            total_products: total,
            total_pages,
            current_page: page,
        })
    }

    async fn create_product(&self, form: &FormData) -> Result<(), ApiError> {
        self.record(ApiCall::Create { form: form.clone() });
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        self.insert(form);
        Ok(())
    }

    async fn update_product(&self, id: &ProductId, form: &FormData) -> Result<(), ApiError> {
        self.record(ApiCall::Update {
            id: id.clone(),
            form: form.clone(),
        });
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let mut products = self.products.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ApiError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                body: String::new(),
            })?;
        *slot = product_from_form(id.clone(), form);
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.record(ApiCall::Delete { id: id.clone() });
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                body: String::new(),
            });
        }
        Ok(())
    }
}
