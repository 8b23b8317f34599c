use scoops_core::{OrderId, ProductId};

use super::{GatewayError, OrderGateway};
use crate::DbPool;

/// Order writes against the configured order table.
pub struct SqlOrderGateway {
    pool: DbPool,
    insert_order_sql: String,
}

impl SqlOrderGateway {
    pub fn new(pool: DbPool, order_table: &str) -> Self {
        Self {
            pool,
            insert_order_sql: format!(
                "INSERT INTO {order_table} (order_id, user_id, product_id, quantity) \
                 VALUES (?1, ?2, ?3, ?4)"
            ),
        }
    }
}

#[async_trait::async_trait]
impl OrderGateway for SqlOrderGateway {
    async fn place_order(
        &self,
        user_id: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<OrderId, GatewayError> {
        let order_id = OrderId::generate();

        tracing::debug!(
            event_name = "order.placing",
            order_id = %order_id,
            user_id,
            product_id = product_id.0,
            quantity,
            "writing order record"
        );

        sqlx::query(&self.insert_order_sql)
            .bind(order_id.to_string())
            .bind(user_id)
            .bind(product_id.0)
            .bind(i64::from(quantity))
            .execute(&self.pool)
            .await?;

        Ok(order_id)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::Row;

    use scoops_core::ProductId;

    use super::SqlOrderGateway;
    use crate::connection::memory_database;
    use crate::gateway::OrderGateway;
    use crate::{connect, migrations, DbPool};

    async fn order_pool() -> DbPool {
        let pool = connect(&memory_database()).await.expect("connect");
        migrations::run_pending(&pool).await.expect("run migrations");
        pool
    }

    #[tokio::test]
    async fn place_order_writes_all_four_fields() {
        let pool = order_pool().await;
        let gateway = SqlOrderGateway::new(pool.clone(), "orders");

        let order_id =
            gateway.place_order("user-42", ProductId(7), 12).await.expect("place order");

        let row = sqlx::query(
            "SELECT order_id, user_id, product_id, quantity FROM orders WHERE order_id = ?1",
        )
        .bind(order_id.to_string())
        .fetch_one(&pool)
        .await
        .expect("order row should exist");

        assert_eq!(row.get::<String, _>("user_id"), "user-42");
        assert_eq!(row.get::<i64, _>("product_id"), 7);
        assert_eq!(row.get::<i64, _>("quantity"), 12);
    }

    #[tokio::test]
    async fn identical_orders_get_distinct_ids() {
        // Current behavior, asserted deliberately: there is no idempotency
        // key, so a replayed placement creates a second order.
        let pool = order_pool().await;
        let gateway = SqlOrderGateway::new(pool.clone(), "orders");

        let first = gateway.place_order("user-42", ProductId(7), 12).await.expect("first order");
        let second = gateway.place_order("user-42", ProductId(7), 12).await.expect("second order");

        assert_ne!(first, second);

        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders").fetch_one(&pool).await;
        assert_eq!(count.expect("count orders"), 2);
    }
}
