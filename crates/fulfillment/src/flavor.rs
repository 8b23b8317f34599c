use scoops_core::{join_natural, validate_product_type, SlotName, ValidationResult};
use scoops_db::CatalogGateway;
use scoops_lex::{clear_slot, slot_value, DialogTurn, InvocationSource, LexResponse};

use crate::{FulfillmentError, CONTACT_CHANNEL};

/// GetProductFlavor: mid-dialog turns only check the product type; confirmed
/// turns re-fetch the flavor list and report it as a sentence.
pub(crate) async fn handle(
    turn: &DialogTurn,
    catalog: &dyn CatalogGateway,
) -> Result<LexResponse, FulfillmentError> {
    let mut slots = turn.slots().clone();

    match turn.invocation_source {
        InvocationSource::DialogCodeHook => {
            let verdict = validate_product_type(slot_value(&slots, SlotName::ProductType));
            if let ValidationResult::Invalid { slot, message } = verdict {
                clear_slot(&mut slots, slot);
                return Ok(LexResponse::elicit_slot(
                    turn.session_attributes(),
                    turn.current_intent.name.clone(),
                    slots,
                    slot,
                    message,
                ));
            }

            Ok(LexResponse::delegate(turn.session_attributes(), slots))
        }
        InvocationSource::FulfillmentCodeHook => {
            // A confirmed turn should arrive with the type filled; an absent
            // type takes the apology path rather than a garbled listing.
            let Some(product_type) =
                slot_value(&slots, SlotName::ProductType).map(str::to_string)
            else {
                return Ok(LexResponse::close(
                    turn.session_attributes(),
                    format!(
                        "Sorry, I could not look up our flavors due to a system error. Please \
                         try it again later or contact us via {CONTACT_CHANNEL}."
                    ),
                ));
            };

            let flavors = catalog.list_flavors(&product_type).await?;
            let listing = join_natural(&flavors);

            Ok(LexResponse::close(
                turn.session_attributes(),
                format!(
                    "Our {product_type} offering consists of the following flavors: {listing}."
                ),
            ))
        }
    }
}
