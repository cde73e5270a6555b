use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::CartClient;
use crate::domain::{Cart, CartSnapshot, LineChange, Product};
use crate::messages::{CartRequest, ServiceResponse};
use super::CartError;

/// The actor that owns the shopper's cart.
///
/// Requests are handled one at a time, so every add, remove or clear is applied
/// in full before the next read can see the cart.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
}

impl CartService {
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cart: Cart::new(),
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Add {
                    product,
                    increment_only,
                    respond_to,
                } => {
                    self.handle_add(product, increment_only, respond_to);
                }
                CartRequest::Remove {
                    product_id,
                    respond_to,
                } => {
                    self.handle_remove(product_id, respond_to);
                }
                CartRequest::Clear { respond_to } => {
                    self.handle_clear(respond_to);
                }
                CartRequest::Items { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.items()));
                }
                CartRequest::TotalPrice { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.total_price()));
                }
                CartRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                CartRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.len()));
                }
                CartRequest::QuantityOf {
                    product_id,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.cart.quantity_of(&product_id)));
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(fields(product_id = %product.id), skip(self, product, respond_to))]
    fn handle_add(
        &mut self,
        product: Product,
        increment_only: bool,
        respond_to: ServiceResponse<(), CartError>,
    ) {
        debug!("Processing add request");

        match self.cart.add(product) {
            LineChange::Inserted => info!(total = %self.cart.total_price(), "Item added to cart"),
            LineChange::Incremented { quantity } => {
                info!(quantity, total = %self.cart.total_price(), "Item quantity increased")
            }
            LineChange::Unchanged => warn!("Quantity limit reached, item not increased"),
            change => debug!(?change, "Unexpected line change on add"),
        }

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove(&mut self, product_id: String, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing remove request");

        match self.cart.remove(&product_id) {
            LineChange::Decremented { quantity } => {
                info!(quantity, total = %self.cart.total_price(), "Item quantity decreased")
            }
            LineChange::Removed => info!(total = %self.cart.total_price(), "Item removed from cart"),
            LineChange::Unchanged => debug!("Item not in cart, nothing to remove"),
            change => debug!(?change, "Unexpected line change on remove"),
        }

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_clear(&mut self, respond_to: ServiceResponse<CartSnapshot, CartError>) {
        if self.cart.is_empty() {
            debug!("Cart already empty");
        }
        let dropped = self.cart.clear();
        info!(lines = dropped.items.len(), total = %dropped.total_price, "Cart cleared");
        let _ = respond_to.send(Ok(dropped));
    }

    fn handle_snapshot(&self, respond_to: ServiceResponse<CartSnapshot, CartError>) {
        let snapshot = self.cart.snapshot();
        debug!(lines = snapshot.items.len(), total = %snapshot.total_price, "Snapshot taken");
        let _ = respond_to.send(Ok(snapshot));
    }
}
