//! The cart store: a single actor that owns the shopper's cart.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
