use super::Money;

/// A product offered by the catalog. Immutable once published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
