use tokio::sync::RwLock;

use scoops_core::{Order, OrderId, Product, ProductId};

use super::{CatalogGateway, GatewayError, OrderGateway};

/// Catalog backed by a fixed product list. Matches the SQL gateway's
/// semantics: equality on the raw type/flavor values, flavors lower-cased on
/// the way out, order preserved.
#[derive(Default)]
pub struct InMemoryCatalogGateway {
    products: Vec<Product>,
}

impl InMemoryCatalogGateway {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait::async_trait]
impl CatalogGateway for InMemoryCatalogGateway {
    async fn list_flavors(&self, product_type: &str) -> Result<Vec<String>, GatewayError> {
        Ok(self
            .products
            .iter()
            .filter(|product| product.product_type == product_type)
            .map(|product| product.flavor.to_lowercase())
            .collect())
    }

    async fn find_product_id(
        &self,
        product_type: &str,
        flavor: &str,
    ) -> Result<Option<ProductId>, GatewayError> {
        Ok(self
            .products
            .iter()
            .find(|product| product.product_type == product_type && product.flavor == flavor)
            .map(|product| product.id))
    }
}

/// Records placed orders so tests can observe the write side.
#[derive(Default)]
pub struct InMemoryOrderGateway {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderGateway {
    pub async fn placed(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }
}

#[async_trait::async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn place_order(
        &self,
        user_id: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<OrderId, GatewayError> {
        let order = Order {
            id: OrderId::generate(),
            user_id: user_id.to_string(),
            product_id,
            quantity,
        };
        let order_id = order.id;
        self.orders.write().await.push(order);
        Ok(order_id)
    }
}
