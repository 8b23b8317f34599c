use crate::DbPool;

/// Seeds the demo catalog used by local development and the db tests.
/// Insertion order matters: flavor listings surface store iteration order.
pub async fn seed_demo_catalog(pool: &DbPool, product_table: &str) -> Result<(), sqlx::Error> {
    let entries = [
        ("ice cream", "Vanilla"),
        ("ice cream", "Chocolate"),
        ("ice cream", "Strawberry"),
        ("frozen yogurt", "Mango"),
        ("frozen yogurt", "Lemon"),
    ];

    let insert_sql = format!("INSERT INTO {product_table} (product_type, flavor) VALUES (?1, ?2)");
    for (product_type, flavor) in entries {
        sqlx::query(&insert_sql).bind(product_type).bind(flavor).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::seed_demo_catalog;
    use crate::connection::memory_database;
    use crate::{connect, migrations};

    #[tokio::test]
    async fn seeding_is_visible_through_plain_queries() {
        let pool = connect(&memory_database()).await.expect("connect");
        migrations::run_pending(&pool).await.expect("run migrations");

        seed_demo_catalog(&pool, "products").await.expect("seed catalog");

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .expect("count products");
        assert_eq!(count, 5);
    }
}
