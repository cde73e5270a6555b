use thiserror::Error;
use crate::cart_actor::CartError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cannot check out an empty cart")]
    EmptyCart,
    #[error(transparent)]
    Cart(#[from] CartError),
}
