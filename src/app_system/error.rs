use thiserror::Error;
use crate::catalog::CatalogError;

/// Errors raised while configuring, starting or stopping the storefront.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Actor task failed: {0}")]
    ActorJoin(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
