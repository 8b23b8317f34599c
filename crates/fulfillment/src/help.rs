use scoops_lex::{DialogTurn, LexResponse};

const GUIDANCE: &str = "Hi, this is the Scoops assistant. Would you like to order something, \
                        or should I show you a list of available flavors for one of our \
                        products?";

/// Stateless: closes immediately with the guidance message regardless of
/// invocation source.
pub(crate) fn handle(turn: &DialogTurn) -> LexResponse {
    LexResponse::close(turn.session_attributes(), GUIDANCE)
}

#[cfg(test)]
mod tests {
    use scoops_lex::{
        CurrentIntent, DialogAction, DialogTurn, FulfillmentState, InvocationSource, Slots,
    };

    use super::handle;

    fn turn(source: InvocationSource) -> DialogTurn {
        DialogTurn {
            invocation_source: source,
            current_intent: CurrentIntent { name: "Help".to_string(), slots: Slots::new() },
            session_attributes: None,
            user_id: None,
        }
    }

    #[test]
    fn closes_with_guidance_regardless_of_invocation_source() {
        for source in [InvocationSource::DialogCodeHook, InvocationSource::FulfillmentCodeHook] {
            let response = handle(&turn(source));

            let DialogAction::Close { fulfillment_state, message } = response.dialog_action else {
                panic!("help should always close");
            };
            assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
            assert!(message.content.contains("list of available flavors"));
        }
    }
}
