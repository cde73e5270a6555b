//! Product image lookup.

use std::collections::HashMap;
use crate::domain::Product;

pub const DEFAULT_IMAGE: &str = "assets/1st_cake.jpg";

/// Cake photos for the storefront menu, by product id.
const STOREFRONT_IMAGES: [(&str, &str); 10] = [
    ("1", "assets/1st_cake.jpg"),
    ("2", "assets/2nd_cake.jpg"),
    ("3", "assets/3rd_cake.jpg"),
    ("4", "assets/4th_cake.jpg"),
    ("5", "assets/5th_cake.jpg"),
    ("6", "assets/6th_cake.jpg"),
    ("7", "assets/7th_cake.jpg"),
    ("8", "assets/8th_cake.jpg"),
    ("9", "assets/9th_cake.jpg"),
    ("10", "assets/10th_cake.jpg"),
];

/// Maps products to image resources by product id. Unknown products get
/// [`DEFAULT_IMAGE`].
#[derive(Debug, Clone)]
pub struct ImageResolver {
    by_id: HashMap<String, String>,
    default_image: String,
}

impl ImageResolver {
    pub fn new(default_image: impl Into<String>) -> Self {
        Self {
            by_id: HashMap::new(),
            default_image: default_image.into(),
        }
    }

    pub fn storefront() -> Self {
        let mut resolver = Self::new(DEFAULT_IMAGE);
        for (id, image) in STOREFRONT_IMAGES {
            resolver.register(id, image);
        }
        resolver
    }

    pub fn register(&mut self, product_id: impl Into<String>, image: impl Into<String>) {
        self.by_id.insert(product_id.into(), image.into());
    }

    pub fn resolve(&self, product: &Product) -> &str {
        self.by_id
            .get(&product.id)
            .map(String::as_str)
            .unwrap_or(&self.default_image)
    }
}
