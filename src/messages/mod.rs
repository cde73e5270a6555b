use tokio::sync::oneshot;
use crate::domain::{CartItem, CartSnapshot, Money, Product};
use crate::cart_actor::CartError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by the cart actor. Each variant carries its parameters
/// and a oneshot channel for the reply.
#[derive(Debug)]
pub enum CartRequest {
    Add {
        product: Product,
        increment_only: bool,
        respond_to: ServiceResponse<(), CartError>,
    },
    Remove {
        product_id: String,
        respond_to: ServiceResponse<(), CartError>,
    },
    /// Replies with the contents that were dropped.
    Clear {
        respond_to: ServiceResponse<CartSnapshot, CartError>,
    },
    Items {
        respond_to: ServiceResponse<Vec<CartItem>, CartError>,
    },
    TotalPrice {
        respond_to: ServiceResponse<Money, CartError>,
    },
    Snapshot {
        respond_to: ServiceResponse<CartSnapshot, CartError>,
    },
    Len {
        respond_to: ServiceResponse<usize, CartError>,
    },
    QuantityOf {
        product_id: String,
        respond_to: ServiceResponse<Option<u32>, CartError>,
    },
    Shutdown,
}
