// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Identyfikator produktu nadawany przez backend (pole `_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId(value.to_string())
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString, Display, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductGender {
    Male,
    Female,
}

impl ProductGender {
    pub fn label(&self) -> &'static str {
        match self {
            ProductGender::Male => "Male",
            ProductGender::Female => "Female",
        }
    }
}

/// Lokalna, nieautorytatywna kopia produktu z backendu.
///
/// Wartości liczbowe (cena, cena promocyjna) trzymamy jako tekst, dokładnie
/// tak jak trafiają do formularza.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default, deserialize_with = "text_value")]
    pub name: String,
    #[serde(default, deserialize_with = "text_value")]
    pub description: String,
    #[serde(default, deserialize_with = "text_value")]
    pub price: String,
    #[serde(default, deserialize_with = "text_value")]
    pub images: String,
    #[serde(default, deserialize_with = "text_value")]
    pub category: String,
    #[serde(default, deserialize_with = "text_value")]
    pub brand: String,
    /// Tekst z backendu bez normalizacji (także spoza `ProductGender`).
    #[serde(default, deserialize_with = "text_value")]
    pub gender: String,
    #[serde(default, deserialize_with = "text_value")]
    pub discount_price: String,
    #[serde(default, deserialize_with = "text_value")]
    pub product_website_link: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
    List(Vec<String>),
}

// Backend potrafi zwrócić liczbę, tekst, listę (images) albo null.
fn text_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(match raw {
        None => String::new(),
        Some(RawText::Text(text)) => text,
        Some(RawText::Number(number)) => number.to_string(),
        Some(RawText::List(items)) => items.join(","),
    })
}

/// Nazwy edytowalnych pól produktu, tak jak występują w formularzu i w JSON-ie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ProductField {
    Name,
    Description,
    Price,
    Images,
    Category,
    Brand,
    Gender,
    DiscountPrice,
    ProductWebsiteLink,
}

impl ProductField {
    pub fn placeholder(&self) -> &'static str {
        match self {
            ProductField::Name => "Product Name",
            ProductField::Description => "Description",
            ProductField::Price => "Price",
            ProductField::Images => "Image URL",
            ProductField::Category => "Category",
            ProductField::Brand => "Brand",
            ProductField::Gender => "Select Gender",
            ProductField::DiscountPrice => "Discount Price",
            ProductField::ProductWebsiteLink => "Product Website Link",
        }
    }

    /// Pola oznaczone w formularzu jako `required`.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ProductField::Name
                | ProductField::Description
                | ProductField::Price
                | ProductField::Images
                | ProductField::Gender
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ProductField::Price | ProductField::DiscountPrice)
    }
}

/// Wersja robocza produktu powiązana z polami formularza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub description: String,
    pub price: String,
    pub images: String,
    pub category: String,
    pub brand: String,
    pub gender: String,
    pub discount_price: String,
    pub product_website_link: String,
}

impl FormData {
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Description => &self.description,
            ProductField::Price => &self.price,
            ProductField::Images => &self.images,
            ProductField::Category => &self.category,
            ProductField::Brand => &self.brand,
            ProductField::Gender => &self.gender,
            ProductField::DiscountPrice => &self.discount_price,
            ProductField::ProductWebsiteLink => &self.product_website_link,
        }
    }

    pub fn set(&mut self, field: ProductField, value: String) {
        let slot = match field {
            ProductField::Name => &mut self.name,
            ProductField::Description => &mut self.description,
            ProductField::Price => &mut self.price,
            ProductField::Images => &mut self.images,
            ProductField::Category => &mut self.category,
            ProductField::Brand => &mut self.brand,
            ProductField::Gender => &mut self.gender,
            ProductField::DiscountPrice => &mut self.discount_price,
            ProductField::ProductWebsiteLink => &mut self.product_website_link,
        };
        *slot = value;
    }
}

impl From<&Product> for FormData {
    fn from(product: &Product) -> Self {
        FormData {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            images: product.images.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            gender: product.gender.clone(),
            discount_price: product.discount_price.clone(),
            product_website_link: product.product_website_link.clone(),
        }
    }
}

/// Odpowiedź `GET /products?page=P&limit=L`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<Product>,
    pub total_products: u64,
    pub total_pages: u32,
    pub current_page: u32,
}
