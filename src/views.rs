// src/views.rs

use maud::{DOCTYPE, Markup, html};
use strum::IntoEnumIterator;
use urlencoding::encode;

use crate::models::{FormData, Product, ProductField, ProductGender};
use crate::pagination::PaginationState;
use crate::store::AdminState;

const PANEL_TARGET: &str = "#admin-panel";
const INPUT_CLASS: &str = "border border-gray-600 bg-gray-800 text-white rounded p-2";

/// Cały panel; cel podmiany (`outerHTML`) dla wszystkich akcji htmx.
pub fn render_admin_panel(state: &AdminState) -> Markup {
    html! {
        div #admin-panel ."container mx-auto p-4 bg-black text-white" {
            h1 ."text-2xl font-bold mb-4" { "Admin Panel" }
            (render_product_form(&state.form, state.is_editing()))
            h2 ."text-xl font-bold mb-4" { "Product List" }
            (render_product_table(&state.products))
            (render_pagination(&state.pagination))
        }
    }
}

fn render_field(form: &FormData, field: ProductField) -> Markup {
    let name = field.as_ref();
    let value = form.get(field);
    // Wartość z backendu spoza listy zostaje opcją, żeby zapis jej nie zgubił.
    let unlisted_gender = field == ProductField::Gender
        && !value.is_empty()
        && !ProductGender::iter().any(|gender| gender.as_ref() == value);
    html! {
        @if field == ProductField::Gender {
            select name=(name) required[field.is_required()] class=(INPUT_CLASS)
                hx-post="/admin/fields" hx-trigger="change" hx-swap="none"
            {
                option value="" selected[value.is_empty()] { (field.placeholder()) }
                @for gender in ProductGender::iter() {
                    option value=(gender.as_ref()) selected[value == gender.as_ref()] { (gender.label()) }
                }
                @if unlisted_gender {
                    option value=(value) selected { (value) }
                }
            }
        } @else {
            input type=(if field.is_numeric() { "number" } else { "text" })
                name=(name)
                placeholder=(field.placeholder())
                value=(value)
                required[field.is_required()]
                class=(INPUT_CLASS)
                hx-post="/admin/fields" hx-trigger="change" hx-swap="none";
        }
    }
}

pub fn render_product_form(form: &FormData, is_editing: bool) -> Markup {
    let submit_label = if is_editing {
        "Update Product"
    } else {
        "Add Product"
    };

    html! {
        form #product-form ."mb-6" hx-post="/admin/submit" hx-target=(PANEL_TARGET) hx-swap="outerHTML" {
            div ."grid grid-cols-1 md:grid-cols-2 gap-4" {
                @for field in ProductField::iter() {
                    (render_field(form, field))
                }
            }
            button type="submit" ."mt-4 bg-blue-600 text-white py-2 px-4 rounded" { (submit_label) }
            button type="button" ."mt-4 ml-2 bg-gray-600 text-white py-2 px-4 rounded"
                hx-post="/admin/reset" hx-target=(PANEL_TARGET) hx-swap="outerHTML"
            {
                "Reset"
            }
        }
    }
}

pub fn render_product_table(products: &[Product]) -> Markup {
    html! {
        table ."min-w-full bg-gray-800 border border-gray-600" {
            thead {
                tr {
                    th ."border px-4 py-2" { "Name" }
                    th ."border px-4 py-2" { "Price" }
                    th ."border px-4 py-2" { "Actions" }
                }
            }
            tbody {
                @for product in products {
                    @let id = encode(&product.id.0);
                    tr ."hover:bg-gray-700" data-product-id=(product.id.0) {
                        td ."border px-4 py-2" { (product.name) }
                        td ."border px-4 py-2" { "$" (product.price) }
                        td ."border px-4 py-2" {
                            button ."bg-yellow-500 text-black px-2 py-1 rounded"
                                hx-post=(format!("/admin/edit/{}", id))
                                hx-target=(PANEL_TARGET) hx-swap="outerHTML"
                            {
                                "Edit"
                            }
                            button ."bg-red-500 text-white px-2 py-1 rounded ml-2"
                                hx-post=(format!("/admin/delete/{}", id))
                                hx-target=(PANEL_TARGET) hx-swap="outerHTML"
                            {
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_pagination(pagination: &PaginationState) -> Markup {
    html! {
        div #pagination-controls ."mt-4 flex justify-between items-center" {
            button #previous-page ."bg-gray-600 text-white py-2 px-4 rounded disabled:opacity-50"
                disabled[pagination.is_previous_disabled()]
                hx-post="/admin/page/previous" hx-target=(PANEL_TARGET) hx-swap="outerHTML"
            {
                "Previous"
            }
            span ."text-white" {
                "Page " (pagination.current_page) " of " (pagination.total_pages)
            }
            button #next-page ."bg-gray-600 text-white py-2 px-4 rounded disabled:opacity-50"
                disabled[pagination.is_next_disabled()]
                hx-post="/admin/page/next" hx-target=(PANEL_TARGET) hx-swap="outerHTML"
            {
                "Next"
            }
        }
        div ."mt-2 text-center text-white" {
            "Total Products: " (pagination.total_products)
        }
    }
}

/// Pełny dokument HTML dla zwykłych (nie-htmx) żądań.
pub fn render_full_page(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Admin Panel" }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body ."bg-black" {
                main #content { (content) }
            }
        }
    }
}
