//! Wire contract with the NLU dialog engine.
//!
//! One [`DialogTurn`] arrives per turn; exactly one [`LexResponse`] goes
//! back, carrying one of the three dialog actions (ElicitSlot, Delegate,
//! Close). Field names follow the Lex code-hook JSON contract, so everything
//! here serializes camelCase with a `type` tag on the action.

pub mod request;
pub mod response;

pub use request::{
    clear_slot, set_slot, slot_value, CurrentIntent, DialogTurn, InvocationSource, Slots,
};
pub use response::{
    ContentType, DialogAction, FulfillmentState, LexResponse, Message, SessionAttributes,
};
