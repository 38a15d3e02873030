//! # Product catalogue
//!
//! The marketplace keeps its products in the browser, not on the backend.
//! [`Catalog`] is the in-memory list the application shell owns; every change
//! is mirrored wholesale to [`keys::PRODUCTS`] via [`save_products`] (no
//! diffing).
//!
//! New products are always **prepended**, so the list reads newest-first and
//! older entries keep their relative order. Ids have the form `p-<n>` where
//! `n` is the creation time in milliseconds, bumped past the largest id
//! already in the list so two products added within the same millisecond
//! (or after a clock step backwards) never collide.

use crate::keys;
use crate::models::{Product, ProductDraft};
use crate::storage::{KeyValueStore, Storage};

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=1200&auto=format&fit=crop";

/// Products shown on a fresh install.
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "p-1".to_string(),
            name: "Performance Training Plan".to_string(),
            price: 29.0,
            image_url: Some(DEFAULT_IMAGE.to_string()),
            seller_id: None,
        },
        Product {
            id: "p-2".to_string(),
            name: "GymUnity Protein Pack".to_string(),
            price: 39.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1517838277536-f5f99be5013c?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            seller_id: None,
        },
        Product {
            id: "p-3".to_string(),
            name: "Mobility Session Bundle".to_string(),
            price: 19.0,
            image_url: Some(
                "https://images.unsplash.com/photo-1599058918144-1ffabb6ab9a0?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            seller_id: None,
        },
    ]
}

/// Image used by product cards when a product has none.
pub fn placeholder_image() -> &'static str {
    DEFAULT_IMAGE
}

/// Load the stored catalogue, seeding (and persisting) the defaults when it
/// is empty, absent or unreadable.
pub fn load_products<S: KeyValueStore>(storage: &Storage<S>) -> Vec<Product> {
    let stored: Vec<Product> = storage.read_or_default(keys::PRODUCTS);
    if !stored.is_empty() {
        return stored;
    }
    let defaults = default_products();
    save_products(storage, &defaults);
    defaults
}

pub fn save_products<S: KeyValueStore>(storage: &Storage<S>, products: &[Product]) {
    storage.write(keys::PRODUCTS, products);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    last_id: u64,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let last_id = products
            .iter()
            .filter_map(|p| p.id.strip_prefix("p-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { products, last_id }
    }

    pub fn load<S: KeyValueStore>(storage: &Storage<S>) -> Self {
        Self::new(load_products(storage))
    }

    pub fn save<S: KeyValueStore>(&self, storage: &Storage<S>) {
        save_products(storage, &self.products);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Prepend a new product created at `now_millis` and return it.
    pub fn add(&mut self, draft: ProductDraft, seller_id: Option<String>, now_millis: u64) -> &Product {
        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;
        self.products.insert(
            0,
            Product {
                id: format!("p-{id}"),
                name: draft.name,
                price: draft.price,
                image_url: draft.image_url,
                seller_id,
            },
        );
        &self.products[0]
    }

    /// Products listed by one seller, newest first.
    pub fn by_seller<'a>(&'a self, seller_id: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| p.seller_id.as_deref() == Some(seller_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            image_url: None,
        }
    }

    #[test]
    fn test_load_seeds_defaults() {
        let storage = Storage::new(MemoryStore::new());
        let products = load_products(&storage);
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "p-1");

        // Seeding is persisted
        assert!(storage.read_raw(keys::PRODUCTS).is_some());
    }

    #[test]
    fn test_load_seeds_defaults_over_garbage() {
        let storage = Storage::new(MemoryStore::new());
        storage.write_raw(keys::PRODUCTS, "{{{");
        assert_eq!(load_products(&storage), default_products());

        storage.write_raw(keys::PRODUCTS, "[]");
        assert_eq!(load_products(&storage), default_products());
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let mut catalog = Catalog::new(default_products());

        // Same millisecond three times
        catalog.add(draft("A", 1.0), None, 1_000);
        catalog.add(draft("B", 2.0), None, 1_000);
        catalog.add(draft("C", 3.0), Some("9".into()), 1_000);

        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "C",
                "B",
                "A",
                "Performance Training Plan",
                "GymUnity Protein Pack",
                "Mobility Session Bundle"
            ]
        );

        let ids: Vec<&str> = catalog.products()[..3].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p-1002", "p-1001", "p-1000"]);
        assert_eq!(catalog.products()[0].seller_id.as_deref(), Some("9"));
    }

    #[test]
    fn test_ids_stay_ahead_of_stored_ids() {
        let mut catalog = Catalog::new(vec![Product {
            id: "p-5000".into(),
            name: "Old".into(),
            price: 1.0,
            image_url: None,
            seller_id: None,
        }]);
        // Clock went backwards
        let added = catalog.add(draft("New", 1.0), None, 10);
        assert_eq!(added.id, "p-5001");
    }

    #[test]
    fn test_save_and_reload() {
        let storage = Storage::new(MemoryStore::new());
        let mut catalog = Catalog::load(&storage);
        catalog.add(draft("Plan", 29.0), Some("1".into()), 1_700_000_000_000);
        catalog.save(&storage);

        let reloaded = Catalog::load(&storage);
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.products()[0].name, "Plan");
        assert_eq!(reloaded.by_seller("1").count(), 1);
    }
}
