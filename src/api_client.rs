// src/api_client.rs

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use urlencoding::encode;

use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::models::{FormData, ProductId, ProductsPage};

/// Operacje backendu produktów wykorzystywane przez stronę administracyjną.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self, page: u32, limit: u32) -> Result<ProductsPage, ApiError>;
    async fn create_product(&self, form: &FormData) -> Result<(), ApiError>;
    async fn update_product(&self, id: &ProductId, form: &FormData) -> Result<(), ApiError>;
    /// Każdy status 2xx oznacza sukces; treść odpowiedzi jest ignorowana.
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
}

/// Klient REST dla `{API_URL}/products`.
#[derive(Debug, Clone)]
pub struct RestProductApi {
    client: Client,
    products_url: String,
}

impl RestProductApi {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            products_url: format!("{}/products", api_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_url, config.api_timeout)
    }

    fn product_url(&self, id: &ProductId) -> String {
        format!("{}/{}", self.products_url, encode(&id.0))
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Brak treści błędu".to_string());
    Err(ApiError::Status { status, body })
}

#[async_trait]
impl ProductApi for RestProductApi {
    async fn list_products(&self, page: u32, limit: u32) -> Result<ProductsPage, ApiError> {
        tracing::debug!("GET {} page={} limit={}", self.products_url, page, limit);
        let response = self
            .client
            .get(&self.products_url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        let products_page = ensure_success(response)
            .await?
            .json::<ProductsPage>()
            .await?;
        Ok(products_page)
    }

    async fn create_product(&self, form: &FormData) -> Result<(), ApiError> {
        tracing::debug!("POST {}", self.products_url);
        let response = self.client.post(&self.products_url).json(form).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update_product(&self, id: &ProductId, form: &FormData) -> Result<(), ApiError> {
        let url = self.product_url(id);
        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(form).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let url = self.product_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
