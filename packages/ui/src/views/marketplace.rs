use dioxus::prelude::*;
use store::ProductDraft;

use crate::components::{ErrorBanner, Notice, PageHeader, ProductCard};
use crate::state::use_app;

#[component]
pub fn MarketplaceView() -> Element {
    let app = use_app();
    let catalog = app.catalog.read();
    let count = catalog.len();

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Store", subtitle: "Products from GymUnity sellers" }
            p { class: "muted small", "Showing {count} items" }
            div {
                class: "product-grid",
                for product in catalog.products().iter() {
                    ProductCard { key: "{product.id}", product: product.clone() }
                }
            }
        }
    }
}

#[component]
pub fn SellerDashboardView() -> Element {
    let app = use_app();
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut published = use_signal(|| false);

    let handle_publish = move |evt: FormEvent| {
        evt.prevent_default();
        published.set(false);
        match ProductDraft::from_form(&name(), &price(), &image_url()) {
            Ok(draft) => {
                app.add_product(draft);
                error.set(None);
                published.set(true);
                name.set(String::new());
                price.set(String::new());
                image_url.set(String::new());
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let seller_id = app.current_user.read().as_ref().map(|u| u.id_string());
    let catalog = app.catalog.read();
    let mine: Vec<_> = seller_id
        .as_deref()
        .map(|id| catalog.by_seller(id).cloned().collect())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Seller dashboard", subtitle: "Manage your GymUnity products" }
            form {
                class: "card product-form",
                onsubmit: handle_publish,
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                if published() {
                    Notice { "Product published." }
                }
                label {
                    "Product name"
                    input {
                        placeholder: "Example: HIIT Program",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label {
                    "Price"
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        placeholder: "29.00",
                        value: "{price}",
                        oninput: move |evt| price.set(evt.value()),
                    }
                }
                label {
                    "Image URL"
                    input {
                        placeholder: "https://...",
                        value: "{image_url}",
                        oninput: move |evt| image_url.set(evt.value()),
                    }
                }
                button { class: "primary", r#type: "submit", "Publish product" }
            }
            h2 { "Your products" }
            if mine.is_empty() {
                Notice { "You have not published any products yet." }
            } else {
                div {
                    class: "product-grid",
                    for product in mine {
                        ProductCard { key: "{product.id}", product }
                    }
                }
            }
        }
    }
}
