pub mod config;
pub mod domain;
pub mod validation;

pub use domain::order::{Order, OrderId};
pub use domain::product::{Product, ProductId};
pub use validation::{
    join_natural, product_types, validate_order_quantity, validate_product_flavor,
    validate_product_type, SlotName, ValidationResult, MAX_ORDER_QUANTITY, MIN_ORDER_QUANTITY,
};
