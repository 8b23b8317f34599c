//! Pure slot validators for the ordering dialog.
//!
//! Validators take plain slot values, never a full dialog turn, and return a
//! [`ValidationResult`]. An absent slot is always valid: validation is
//! deferred until the NLU layer has actually filled the slot.

use serde::{Deserialize, Serialize};

pub const MIN_ORDER_QUANTITY: i64 = 5;
pub const MAX_ORDER_QUANTITY: i64 = 30;

const PRODUCT_TYPES: [&str; 2] = ["ice cream", "frozen yogurt"];

/// The slots recognized by this bot, with their wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotName {
    ProductType,
    ProductFlavor,
    OrderQuantity,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductType => "productType",
            Self::ProductFlavor => "productFlavor",
            Self::OrderQuantity => "orderQuantity",
        }
    }
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a single slot. A valid verdict carries no slot or message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { slot: SlotName, message: String },
}

impl ValidationResult {
    fn invalid(slot: SlotName, message: impl Into<String>) -> Self {
        Self::Invalid { slot, message: message.into() }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// The fixed product-type list. In-process, not store-backed.
pub fn product_types() -> &'static [&'static str] {
    &PRODUCT_TYPES
}

/// Valid when absent or a case-insensitive member of the fixed type list.
pub fn validate_product_type(product_type: Option<&str>) -> ValidationResult {
    let Some(value) = product_type else {
        return ValidationResult::Valid;
    };

    if PRODUCT_TYPES.contains(&value.to_lowercase().as_str()) {
        return ValidationResult::Valid;
    }

    let offered = join_natural(&PRODUCT_TYPES);
    ValidationResult::invalid(
        SlotName::ProductType,
        format!(
            "We do not have {value}, please select one of the following products. We offer: \
             {offered}"
        ),
    )
}

/// Valid when absent or a case-insensitive member of `available`, the flavor
/// list the caller fetched from the catalog for `product_type`.
pub fn validate_product_flavor(
    product_type: &str,
    flavor: Option<&str>,
    available: &[String],
) -> ValidationResult {
    let Some(value) = flavor else {
        return ValidationResult::Valid;
    };

    if available.iter().any(|candidate| candidate == &value.to_lowercase()) {
        return ValidationResult::Valid;
    }

    let offered = join_natural(available);
    ValidationResult::invalid(
        SlotName::ProductFlavor,
        format!(
            "We do not have {value} {product_type}, please select one of the following \
             {product_type} flavors. {offered}"
        ),
    )
}

/// Valid when absent or an integer in `[MIN_ORDER_QUANTITY, MAX_ORDER_QUANTITY]`.
/// Non-numeric input gets its own violation message.
pub fn validate_order_quantity(quantity: Option<&str>) -> ValidationResult {
    let Some(value) = quantity else {
        return ValidationResult::Valid;
    };

    let Ok(parsed) = value.trim().parse::<i64>() else {
        return ValidationResult::invalid(
            SlotName::OrderQuantity,
            "Sorry, I did not understand that quantity. How many cups would you like to order?",
        );
    };

    if parsed < MIN_ORDER_QUANTITY {
        return ValidationResult::invalid(
            SlotName::OrderQuantity,
            format!(
                "Sorry but the minimum order quantity is {MIN_ORDER_QUANTITY} cups. How many \
                 would you like to order?"
            ),
        );
    }

    if parsed > MAX_ORDER_QUANTITY {
        return ValidationResult::invalid(
            SlotName::OrderQuantity,
            format!(
                "Sorry but the maximum order quantity for online orders is \
                 {MAX_ORDER_QUANTITY}. Please contact us directly for larger quantity orders. \
                 How many cups would you like to order instead?"
            ),
        );
    }

    ValidationResult::Valid
}

/// Joins items comma-separated with the last pair joined by "and":
/// `["a", "b", "c"]` becomes `"a, b and c"`.
pub fn join_natural<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init = init.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
            format!("{init} and {}", last.as_ref())
        }
    }
}
