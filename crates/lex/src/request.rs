use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scoops_core::SlotName;

use crate::response::SessionAttributes;

/// Slot mapping as it appears on the wire: values stay string-or-null, and
/// unrecognized slot names pass through untouched.
pub type Slots = BTreeMap<String, Option<String>>;

/// Whether the turn is mid-dialog (validate) or confirmed (fulfill).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
}

/// The incoming request, one per dialog turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogTurn {
    pub invocation_source: InvocationSource,
    pub current_intent: CurrentIntent,
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl DialogTurn {
    /// Sentinel user id for anonymous turns.
    pub const DEFAULT_USER_ID: &'static str = "0";

    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(Self::DEFAULT_USER_ID)
    }

    /// Session attributes are opaque pass-through data owned by the caller;
    /// a null map is treated as empty.
    pub fn session_attributes(&self) -> SessionAttributes {
        self.session_attributes.clone().unwrap_or_default()
    }

    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    pub fn slot(&self, slot: SlotName) -> Option<&str> {
        slot_value(&self.current_intent.slots, slot)
    }
}

pub fn slot_value(slots: &Slots, slot: SlotName) -> Option<&str> {
    slots.get(slot.as_str()).and_then(|value| value.as_deref())
}

pub fn set_slot(slots: &mut Slots, slot: SlotName, value: String) {
    slots.insert(slot.as_str().to_string(), Some(value));
}

/// Nulls the slot out so the NLU layer re-prompts for it; a rejected value
/// must never survive in the outgoing mapping.
pub fn clear_slot(slots: &mut Slots, slot: SlotName) {
    slots.insert(slot.as_str().to_string(), None);
}

#[cfg(test)]
mod tests {
    use scoops_core::SlotName;

    use super::{clear_slot, set_slot, slot_value, DialogTurn, InvocationSource, Slots};

    #[test]
    fn deserializes_a_full_turn_from_wire_json() {
        let turn: DialogTurn = serde_json::from_value(serde_json::json!({
            "invocationSource": "DialogCodeHook",
            "currentIntent": {
                "name": "OrderProduct",
                "slots": {
                    "productType": "ice cream",
                    "productFlavor": null,
                    "orderQuantity": "12"
                }
            },
            "sessionAttributes": {"visit": "2"},
            "userId": "user-17"
        }))
        .expect("turn should deserialize");

        assert_eq!(turn.invocation_source, InvocationSource::DialogCodeHook);
        assert_eq!(turn.current_intent.name, "OrderProduct");
        assert_eq!(turn.slot(SlotName::ProductType), Some("ice cream"));
        assert_eq!(turn.slot(SlotName::ProductFlavor), None);
        assert_eq!(turn.slot(SlotName::OrderQuantity), Some("12"));
        assert_eq!(turn.user_id(), "user-17");
        assert_eq!(turn.session_attributes().get("visit").map(String::as_str), Some("2"));
    }

    #[test]
    fn absent_user_id_and_session_attributes_take_defaults() {
        let turn: DialogTurn = serde_json::from_value(serde_json::json!({
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": "Help", "slots": {}}
        }))
        .expect("turn should deserialize without optional fields");

        assert_eq!(turn.user_id(), DialogTurn::DEFAULT_USER_ID);
        assert!(turn.session_attributes().is_empty());
    }

    #[test]
    fn slot_helpers_preserve_unknown_keys() {
        let mut slots = Slots::new();
        slots.insert("somethingElse".to_string(), Some("kept".to_string()));
        set_slot(&mut slots, SlotName::ProductType, "ice cream".to_string());
        clear_slot(&mut slots, SlotName::ProductType);

        assert_eq!(slot_value(&slots, SlotName::ProductType), None);
        assert!(slots.contains_key("productType"));
        assert_eq!(slots.get("somethingElse"), Some(&Some("kept".to_string())));
    }
}
