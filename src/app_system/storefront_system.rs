use std::sync::Arc;
use tracing::{error, info, instrument};
use crate::assets::ImageResolver;
use crate::cart_actor::CartService;
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::domain::Product;
use super::{SystemConfig, SystemError};

/// The storefront session: owns the cart actor and the read-only collaborators.
///
/// Consumers receive the pieces they need explicitly; there is no global cart.
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    pub catalog: Arc<Catalog>,
    pub images: Arc<ImageResolver>,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Starts the storefront with the cake menu. Must run inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Result<Self, SystemError> {
        Self::with_products(config, Catalog::storefront_products())
    }

    #[instrument(name = "storefront_system", skip(products))]
    pub fn with_products(config: SystemConfig, products: Vec<Product>) -> Result<Self, SystemError> {
        config.validate()?;
        let catalog = Catalog::new(products)?;
        info!(products = catalog.len(), "Starting storefront");

        let images = ImageResolver::storefront();

        let (cart_service, cart_client) = CartService::new(config.channel_capacity);
        let handle = tokio::spawn(cart_service.run());

        info!("Storefront started successfully");

        Ok(Self {
            cart_client,
            catalog: Arc::new(catalog),
            images: Arc::new(images),
            handle,
        })
    }

    /// Stops the cart actor and waits for it to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down storefront");

        // The actor may already be gone if every client was dropped
        let _ = self.cart_client.shutdown().await;
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Cart service shutdown error");
            return Err(SystemError::ActorJoin(e.to_string()));
        }

        info!("Storefront shutdown complete");
        Ok(())
    }
}
