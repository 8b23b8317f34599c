use scoops_core::{
    validate_order_quantity, validate_product_flavor, validate_product_type, SlotName,
    ValidationResult,
};
use scoops_db::{CatalogGateway, OrderGateway};
use scoops_lex::{
    clear_slot, set_slot, slot_value, DialogTurn, InvocationSource, LexResponse, Slots,
};

use crate::{FulfillmentError, CONTACT_CHANNEL};

pub(crate) async fn handle(
    turn: &DialogTurn,
    catalog: &dyn CatalogGateway,
    orders: &dyn OrderGateway,
) -> Result<LexResponse, FulfillmentError> {
    match turn.invocation_source {
        InvocationSource::DialogCodeHook => validate(turn, catalog).await,
        InvocationSource::FulfillmentCodeHook => fulfill(turn, catalog, orders).await,
    }
}

/// Runs the validators in fixed order (type, flavor, quantity) and
/// short-circuits on the first violation: the offending slot is nulled in
/// the outgoing mapping and re-elicited with the corrective message.
async fn validate(
    turn: &DialogTurn,
    catalog: &dyn CatalogGateway,
) -> Result<LexResponse, FulfillmentError> {
    let mut slots = turn.slots().clone();

    // The NLU layer sometimes parses the product name into the flavor slot
    // and leaves the type empty; treat the flavor value as the type
    // candidate so validation can catch it.
    if slot_value(&slots, SlotName::ProductType).is_none() {
        if let Some(flavor) = slot_value(&slots, SlotName::ProductFlavor).map(str::to_string) {
            set_slot(&mut slots, SlotName::ProductType, flavor);
        }
    }

    let type_verdict = validate_product_type(slot_value(&slots, SlotName::ProductType));
    if let ValidationResult::Invalid { slot, message } = type_verdict {
        return Ok(elicit(turn, slots, slot, message));
    }

    if let Some(product_type) = slot_value(&slots, SlotName::ProductType).map(str::to_string) {
        // Fetch the flavor list only when there is a flavor to check.
        if slot_value(&slots, SlotName::ProductFlavor).is_some() {
            let available = catalog.list_flavors(&product_type).await?;
            let flavor_verdict = validate_product_flavor(
                &product_type,
                slot_value(&slots, SlotName::ProductFlavor),
                &available,
            );
            if let ValidationResult::Invalid { slot, message } = flavor_verdict {
                return Ok(elicit(turn, slots, slot, message));
            }
        }
    }

    let quantity_verdict = validate_order_quantity(slot_value(&slots, SlotName::OrderQuantity));
    if let ValidationResult::Invalid { slot, message } = quantity_verdict {
        return Ok(elicit(turn, slots, slot, message));
    }

    Ok(LexResponse::delegate(turn.session_attributes(), slots))
}

/// Terminal pass: look the product up, write the order, confirm. A lookup
/// miss closes with the apology and writes nothing; the lookup must succeed
/// before the write is attempted.
async fn fulfill(
    turn: &DialogTurn,
    catalog: &dyn CatalogGateway,
    orders: &dyn OrderGateway,
) -> Result<LexResponse, FulfillmentError> {
    let slots = turn.slots();
    let session_attributes = turn.session_attributes();

    let product_type = slot_value(slots, SlotName::ProductType);
    let flavor = slot_value(slots, SlotName::ProductFlavor);
    let quantity =
        slot_value(slots, SlotName::OrderQuantity).and_then(|raw| raw.trim().parse::<u32>().ok());

    // A confirmed turn should arrive with every slot filled and validated;
    // anything else takes the apology path without touching the store.
    let (Some(product_type), Some(flavor), Some(quantity)) = (product_type, flavor, quantity)
    else {
        return Ok(LexResponse::close(
            session_attributes,
            format!(
                "Sorry, your order has not been placed due to a system error. Please try it \
                 again later or contact us via {CONTACT_CHANNEL}."
            ),
        ));
    };

    let Some(product_id) = catalog.find_product_id(product_type, flavor).await? else {
        return Ok(LexResponse::close(
            session_attributes,
            format!(
                "Sorry, your order of {quantity} cups of {flavor} {product_type} has not been \
                 placed due to a system error. Please try it again later or contact us via \
                 {CONTACT_CHANNEL}."
            ),
        ));
    };

    let order_id = orders.place_order(turn.user_id(), product_id, quantity).await?;

    tracing::info!(
        event_name = "order.placed",
        order_id = %order_id,
        user_id = %turn.user_id(),
        product_id = product_id.0,
        quantity,
        "order fulfilled"
    );

    Ok(LexResponse::close(
        session_attributes,
        format!(
            "Thank you for ordering from Scoops. Your order of {quantity} cups of {flavor} \
             {product_type} has been placed and will be processed immediately (Order ID: \
             {order_id}). Can I help you with anything else?"
        ),
    ))
}

fn elicit(turn: &DialogTurn, mut slots: Slots, slot: SlotName, message: String) -> LexResponse {
    clear_slot(&mut slots, slot);
    LexResponse::elicit_slot(
        turn.session_attributes(),
        turn.current_intent.name.clone(),
        slots,
        slot,
        message,
    )
}
