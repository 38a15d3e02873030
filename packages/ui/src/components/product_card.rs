use dioxus::prelude::*;
use store::catalog::placeholder_image;
use store::models::format_price;
use store::Product;

#[component]
pub fn ProductCard(product: Product) -> Element {
    let image = product
        .image_url
        .clone()
        .unwrap_or_else(|| placeholder_image().to_string());
    let price = format_price(product.price);

    rsx! {
        article {
            class: "card product-card",
            img { src: "{image}", alt: "{product.name}" }
            div {
                class: "product-card__body",
                h3 { "{product.name}" }
                p { class: "price", "{price}" }
            }
        }
    }
}
