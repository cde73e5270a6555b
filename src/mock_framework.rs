//! # Mock Framework
//!
//! Utilities for testing code that talks to the cart actor without running it.
//!
//! Use [`create_mock_cart_client`] to get a client and a receiver.
//! Then use helpers like [`expect_snapshot`] or [`expect_clear`] to assert behavior.

use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::domain::CartSnapshot;
use crate::messages::{CartRequest, ServiceResponse};
use tokio::sync::mpsc;

/// Creates a cart client whose requests land on a receiver the test controls.
///
/// The test plays the actor: it inspects each request and answers it, which
/// makes success, failure and ordering deterministic.
pub fn create_mock_cart_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<CartSnapshot, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Clear request
pub async fn expect_clear(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<CartSnapshot, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::Clear { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(String, bool, ServiceResponse<(), CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::Add {
            product,
            increment_only,
            respond_to,
        }) => Some((product.id, increment_only, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, Product};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_cart_client(10);

        let add_task = tokio::spawn(async move {
            let product = Product::new("1", "Test Cake", Money::pesos(599));
            client.add(product, true).await
        });

        let (product_id, increment_only, responder) =
            expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(product_id, "1");
        assert!(increment_only);
        responder.send(Ok(())).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(()));
    }
}
