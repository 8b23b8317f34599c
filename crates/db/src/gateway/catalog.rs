use scoops_core::ProductId;

use super::{CatalogGateway, GatewayError};
use crate::DbPool;

/// Catalog lookups against the configured product table.
///
/// The table name comes from configuration (validated there as a plain
/// identifier), so the statements are built once at construction.
pub struct SqlCatalogGateway {
    pool: DbPool,
    list_flavors_sql: String,
    find_product_sql: String,
}

impl SqlCatalogGateway {
    pub fn new(pool: DbPool, product_table: &str) -> Self {
        Self {
            pool,
            list_flavors_sql: format!(
                "SELECT flavor FROM {product_table} WHERE product_type = ?1"
            ),
            find_product_sql: format!(
                "SELECT product_id FROM {product_table} \
                 WHERE product_type = ?1 AND flavor = ?2"
            ),
        }
    }
}

#[async_trait::async_trait]
impl CatalogGateway for SqlCatalogGateway {
    async fn list_flavors(&self, product_type: &str) -> Result<Vec<String>, GatewayError> {
        let flavors = sqlx::query_scalar::<_, String>(&self.list_flavors_sql)
            .bind(product_type)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            event_name = "catalog.flavors_listed",
            product_type,
            count = flavors.len(),
            "fetched flavors for product type"
        );

        Ok(flavors.into_iter().map(|flavor| flavor.to_lowercase()).collect())
    }

    async fn find_product_id(
        &self,
        product_type: &str,
        flavor: &str,
    ) -> Result<Option<ProductId>, GatewayError> {
        let ids = sqlx::query_scalar::<_, i64>(&self.find_product_sql)
            .bind(product_type)
            .bind(flavor)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids.first().copied().map(ProductId))
    }
}
