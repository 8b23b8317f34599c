use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scoops_core::SlotName;

use crate::request::Slots;

pub type SessionAttributes = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self { content_type: ContentType::PlainText, content: content.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// The three dialog actions this backend can answer with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot { intent_name: String, slots: Slots, slot_to_elicit: String, message: Message },
    Delegate { slots: Slots },
    #[serde(rename_all = "camelCase")]
    Close { fulfillment_state: FulfillmentState, message: Message },
}

/// Response envelope: session attributes accompany every action shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

impl LexResponse {
    /// Ask the user for a specific slot again, with a corrective message.
    pub fn elicit_slot(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: SlotName,
        message: impl Into<String>,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.as_str().to_string(),
                message: Message::plain_text(message),
            },
        }
    }

    /// Hand control back to the NLU engine with the current slot mapping.
    pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> Self {
        Self { session_attributes, dialog_action: DialogAction::Delegate { slots } }
    }

    /// Terminate the turn with a final message. The state is always
    /// `Fulfilled`, even on the apology path; callers distinguish outcomes
    /// by message text alone.
    pub fn close(session_attributes: SessionAttributes, content: impl Into<String>) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state: FulfillmentState::Fulfilled,
                message: Message::plain_text(content),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use scoops_core::SlotName;

    use super::{LexResponse, SessionAttributes};
    use crate::request::Slots;

    fn slots_fixture() -> Slots {
        let mut slots = Slots::new();
        slots.insert("productType".to_string(), Some("ice cream".to_string()));
        slots.insert("productFlavor".to_string(), None);
        slots
    }

    #[test]
    fn elicit_slot_serializes_to_the_wire_shape() {
        let mut attributes = SessionAttributes::new();
        attributes.insert("visit".to_string(), "2".to_string());

        let response = LexResponse::elicit_slot(
            attributes,
            "OrderProduct",
            slots_fixture(),
            SlotName::ProductFlavor,
            "Which flavor?",
        );

        let serialized = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(
            serialized,
            serde_json::json!({
                "sessionAttributes": {"visit": "2"},
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "OrderProduct",
                    "slots": {"productType": "ice cream", "productFlavor": null},
                    "slotToElicit": "productFlavor",
                    "message": {"contentType": "PlainText", "content": "Which flavor?"}
                }
            })
        );
    }

    #[test]
    fn delegate_serializes_to_the_wire_shape() {
        let response = LexResponse::delegate(SessionAttributes::new(), slots_fixture());

        let serialized = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(
            serialized,
            serde_json::json!({
                "sessionAttributes": {},
                "dialogAction": {
                    "type": "Delegate",
                    "slots": {"productType": "ice cream", "productFlavor": null}
                }
            })
        );
    }

    #[test]
    fn close_serializes_with_fulfilled_state_and_plain_text_message() {
        let response = LexResponse::close(SessionAttributes::new(), "All done.");

        let serialized = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(
            serialized,
            serde_json::json!({
                "sessionAttributes": {},
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Fulfilled",
                    "message": {"contentType": "PlainText", "content": "All done."}
                }
            })
        );
    }
}
