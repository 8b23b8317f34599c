//! Intent dispatch and the per-intent fulfillment handlers.
//!
//! Each handler is a two-state machine driven by the turn's invocation
//! source: mid-dialog turns run the slot validators and answer with
//! ElicitSlot or Delegate; confirmed turns perform the intent's terminal
//! action and answer with Close.

mod flavor;
mod help;
mod order;

pub mod dispatch;

pub use dispatch::{Dispatcher, Intent};

/// Where apology messages point users when the system lets them down.
pub(crate) const CONTACT_CHANNEL: &str = "info@scoops.example";

use thiserror::Error;

use scoops_db::GatewayError;

#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// A caller-contract violation, not a user input error: there is no
    /// recovery and no user-facing message.
    #[error("intent `{name}` is not supported")]
    UnsupportedIntent { name: String },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
