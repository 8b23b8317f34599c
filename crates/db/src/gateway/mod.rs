use async_trait::async_trait;
use thiserror::Error;

use scoops_core::{OrderId, ProductId};

pub mod catalog;
pub mod memory;
pub mod order;

pub use catalog::SqlCatalogGateway;
pub use memory::{InMemoryCatalogGateway, InMemoryOrderGateway};
pub use order::SqlOrderGateway;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("store error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read-only lookups against the product catalog. Single-shot calls; store
/// failures propagate to the caller unretried.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// All flavors of the given type, lower-cased, in store iteration order.
    async fn list_flavors(&self, product_type: &str) -> Result<Vec<String>, GatewayError>;

    /// Identifier of the first entry matching both type and flavor, or
    /// `None` when nothing matches. Multiple matches are not expected; the
    /// first is used silently.
    async fn find_product_id(
        &self,
        product_type: &str,
        flavor: &str,
    ) -> Result<Option<ProductId>, GatewayError>;
}

/// The single write this system performs.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Generates a fresh order id, writes the record, and returns the id.
    /// No idempotency key: two identical calls produce two distinct orders.
    async fn place_order(
        &self,
        user_id: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<OrderId, GatewayError>;
}
