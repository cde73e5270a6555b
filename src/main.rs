mod domain;
mod messages;
mod clients;
mod cart_actor;
mod catalog;
mod assets;
mod checkout;
mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, StorefrontSystem, SystemConfig};
use crate::checkout::Checkout;
use crate::clients::CartClient;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config);

    info!("Starting cake storefront");

    let system = StorefrontSystem::new(config).map_err(|e| e.to_string())?;
    let cart = system.cart_client.clone();

    // Browse: search the catalog and put a couple of cakes in the cart
    let span = tracing::info_span!("browse");
    async {
        for product in system.catalog.search("cake (whole)").into_iter().take(2) {
            info!(product_id = %product.id, price = %product.price, "Adding to cart");
            cart.add(product.clone(), false).await.map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Cart screen: step quantities up and down
    let span = tracing::info_span!("cart");
    async {
        if let Some(first) = system.catalog.get("1") {
            cart.add(first.clone(), true).await.map_err(|e| e.to_string())?;
        }
        cart.remove("2".to_string()).await.map_err(|e| e.to_string())?;
        log_cart(&system, &cart).await
    }
    .instrument(span)
    .await?;

    // Checkout and confirm
    let span = tracing::info_span!("checkout");
    let checkout_result = async {
        if cart.is_empty().await? {
            warn!("Nothing to check out");
        }
        let checkout = Checkout::begin(&cart).await?;
        info!(lines = cart.len().await?, total = %checkout.total_price(), "Confirming purchase");
        checkout.confirm().await
    }
    .instrument(span)
    .await;

    match checkout_result {
        Ok(receipt) => info!(
            lines = receipt.items.len(),
            total = %receipt.total_price,
            discarded = receipt.discarded.len(),
            "Thank you for your purchase!"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    drop(cart);

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Storefront closed");
    Ok(())
}

async fn log_cart(system: &StorefrontSystem, cart: &CartClient) -> Result<(), String> {
    let snapshot = cart.snapshot().await.map_err(|e| e.to_string())?;
    if snapshot.is_empty() {
        warn!("Your cart is empty.");
        return Ok(());
    }

    for item in &snapshot.items {
        info!(
            product_id = item.id(),
            name = %item.product.name,
            quantity = item.quantity,
            line_total = %item.line_total(),
            image = system.images.resolve(&item.product),
            "Cart line"
        );
    }
    info!(units = snapshot.unit_count(), total = %snapshot.total_price, "Cart total");
    Ok(())
}
