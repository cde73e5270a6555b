use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(String),
}
