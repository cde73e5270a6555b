//! The fixed storefront catalog.

pub mod error;

pub use error::*;

use std::collections::HashSet;
use crate::domain::{Money, Product};

/// Read-only, ordered list of products the shop sells.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = products.iter().find(|p| !seen.insert(p.id.as_str())) {
                return Err(CatalogError::DuplicateId(dup.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products whose name contains `query`, ignoring case, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// The cake shop's menu, in display order.
    pub fn storefront_products() -> Vec<Product> {
        [
            ("1", "Wanna make you *bleep Cake (Whole)", 599),
            ("2", "...I mean Camaraderie Cake (Whole)", 830),
            ("3", "That's the me...Cake (Whole)", 355),
            ("4", "Petite and Sweet Short-cake (Whole)", 455),
            ("5", "Don't embarass me...Like the others Cake (Whole)", 500),
            ("6", "Mr. Fruity Cake", 400),
            ("7", "Nonsense Cake (Whole)", 700),
            ("8", "Wanna try some freaky...cake? (Whole)", 699),
            ("9", "Ever Tried 'This' One? Cake (Whole)", 699),
            ("10", "Light as a Feather Cake (Whole)", 500),
        ]
        .into_iter()
        .map(|(id, name, pesos)| Product::new(id, name, Money::pesos(pesos)))
        .collect()
    }
}
