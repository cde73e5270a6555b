use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::cart_actor::CartError;
use crate::domain::{CartItem, CartSnapshot, Money, Product};
use crate::messages::CartRequest;

/// Handle to the cart actor. Cheap to clone; every clone talks to the same cart.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop. No reply is expected.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }

    pub async fn is_empty(&self) -> Result<bool, CartError> {
        Ok(self.len().await? == 0)
    }
}

// `increment_only` marks calls from the quantity stepper; the cart treats both the same.
client_method!(CartClient => fn add(product: Product, increment_only: bool) -> () as CartRequest::Add, Error = CartError);
client_method!(CartClient => fn remove(product_id: String) -> () as CartRequest::Remove, Error = CartError);
client_method!(CartClient => fn clear() -> CartSnapshot as CartRequest::Clear, Error = CartError);
client_method!(CartClient => fn len() -> usize as CartRequest::Len, Error = CartError);
client_method!(CartClient => fn items() -> Vec<CartItem> as CartRequest::Items, Error = CartError);
client_method!(CartClient => fn total_price() -> Money as CartRequest::TotalPrice, Error = CartError);
client_method!(CartClient => fn snapshot() -> CartSnapshot as CartRequest::Snapshot, Error = CartError);
client_method!(CartClient => fn quantity_of(product_id: String) -> Option<u32> as CartRequest::QuantityOf, Error = CartError);
