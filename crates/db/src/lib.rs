pub mod connection;
pub mod fixtures;
pub mod gateway;
pub mod migrations;

pub use connection::{connect, DbPool};
pub use gateway::{
    CatalogGateway, GatewayError, InMemoryCatalogGateway, InMemoryOrderGateway, OrderGateway,
    SqlCatalogGateway, SqlOrderGateway,
};
