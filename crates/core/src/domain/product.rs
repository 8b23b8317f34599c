use serde::{Deserialize, Serialize};

/// Numeric catalog identifier assigned by the product store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

/// One catalog entry: a flavor within a product type.
///
/// Products are owned entirely by the external catalog store; this system
/// only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub product_type: String,
    pub flavor: String,
}
