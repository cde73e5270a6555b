//! Checkout: hand the cart contents to confirmation, then empty the cart.

pub mod error;

pub use error::*;

use tracing::{info, instrument, warn};
use crate::clients::CartClient;
use crate::domain::{CartItem, CartSnapshot, Money};

/// The outcome of a confirmed purchase.
///
/// `items` and `total_price` are the contents captured by [`Checkout::begin`].
/// Confirming empties the whole cart, so anything added after `begin` is
/// dropped without being bought; those lines end up in `discarded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub items: Vec<CartItem>,
    pub total_price: Money,
    pub discarded: Vec<CartItem>,
}

/// A pending purchase holding its own copy of the cart contents.
///
/// Nothing flows back into the cart from here except the clear on confirm.
pub struct Checkout {
    cart_client: CartClient,
    snapshot: CartSnapshot,
}

impl Checkout {
    /// Starts a checkout from the cart's current contents.
    #[instrument(skip(cart_client))]
    pub async fn begin(cart_client: &CartClient) -> Result<Self, CheckoutError> {
        let snapshot = cart_client.snapshot().await?;
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        info!(lines = snapshot.items.len(), total = %snapshot.total_price, "Checkout started");
        Ok(Self {
            cart_client: cart_client.clone(),
            snapshot,
        })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.snapshot.items
    }

    pub fn total_price(&self) -> Money {
        self.snapshot.total_price
    }

    /// Confirms the purchase: clears the cart and returns the receipt.
    #[instrument(skip(self), fields(total = %self.snapshot.total_price))]
    pub async fn confirm(self) -> Result<Receipt, CheckoutError> {
        let dropped = self.cart_client.clear().await?;
        let discarded = not_in_snapshot(&self.snapshot, dropped.items);
        if !discarded.is_empty() {
            warn!(lines = discarded.len(), "Cart changed after checkout began, extra items discarded");
        }
        info!("Purchase confirmed");

        Ok(Receipt {
            items: self.snapshot.items,
            total_price: self.snapshot.total_price,
            discarded,
        })
    }
}

/// Lines (or the extra quantity of lines) present in `dropped` but not in `snapshot`.
fn not_in_snapshot(snapshot: &CartSnapshot, dropped: Vec<CartItem>) -> Vec<CartItem> {
    dropped
        .into_iter()
        .filter_map(|mut item| {
            let bought = snapshot
                .items
                .iter()
                .find(|line| line.id() == item.id())
                .map_or(0, |line| line.quantity);
            item.quantity = item.quantity.checked_sub(bought).filter(|extra| *extra > 0)?;
            Some(item)
        })
        .collect()
}
