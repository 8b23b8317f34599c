use std::sync::Arc;

use scoops_db::{CatalogGateway, OrderGateway};
use scoops_lex::{DialogTurn, LexResponse};

use crate::{flavor, help, order, FulfillmentError};

/// The closed set of intents this backend serves. Anything else is a fatal
/// contract violation from the NLU layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    GetProductFlavor,
    OrderProduct,
    Help,
}

impl std::str::FromStr for Intent {
    type Err = FulfillmentError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        // Intent names are matched exactly; no case folding.
        match name {
            "GetProductFlavor" => Ok(Self::GetProductFlavor),
            "OrderProduct" => Ok(Self::OrderProduct),
            "Help" => Ok(Self::Help),
            other => Err(FulfillmentError::UnsupportedIntent { name: other.to_string() }),
        }
    }
}

/// Routes one turn to its intent handler.
pub struct Dispatcher {
    catalog: Arc<dyn CatalogGateway>,
    orders: Arc<dyn OrderGateway>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<dyn CatalogGateway>, orders: Arc<dyn OrderGateway>) -> Self {
        Self { catalog, orders }
    }

    pub async fn dispatch(&self, turn: &DialogTurn) -> Result<LexResponse, FulfillmentError> {
        let intent: Intent = turn.current_intent.name.parse()?;

        tracing::debug!(
            event_name = "dialog.dispatch",
            intent = %turn.current_intent.name,
            user_id = %turn.user_id(),
            invocation_source = ?turn.invocation_source,
            "dispatching dialog turn"
        );

        match intent {
            Intent::GetProductFlavor => flavor::handle(turn, self.catalog.as_ref()).await,
            Intent::OrderProduct => {
                order::handle(turn, self.catalog.as_ref(), self.orders.as_ref()).await
            }
            Intent::Help => Ok(help::handle(turn)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use scoops_db::{InMemoryCatalogGateway, InMemoryOrderGateway};
    use scoops_lex::{CurrentIntent, DialogAction, DialogTurn, InvocationSource, Slots};

    use super::Dispatcher;
    use crate::FulfillmentError;

    fn turn(intent_name: &str) -> DialogTurn {
        DialogTurn {
            invocation_source: InvocationSource::FulfillmentCodeHook,
            current_intent: CurrentIntent { name: intent_name.to_string(), slots: Slots::new() },
            session_attributes: None,
            user_id: None,
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            Arc::new(InMemoryCatalogGateway::default()),
            Arc::new(InMemoryOrderGateway::default()),
        )
    }

    #[tokio::test]
    async fn unsupported_intent_is_a_fatal_error_with_no_response() {
        let result = dispatcher().dispatch(&turn("Unsupported")).await;

        let Err(FulfillmentError::UnsupportedIntent { name }) = result else {
            panic!("expected unsupported-intent error");
        };
        assert_eq!(name, "Unsupported");
    }

    #[tokio::test]
    async fn intent_names_are_matched_case_sensitively() {
        let result = dispatcher().dispatch(&turn("help")).await;

        assert!(matches!(result, Err(FulfillmentError::UnsupportedIntent { .. })));
    }

    #[tokio::test]
    async fn help_intent_routes_to_its_handler() {
        let response = dispatcher().dispatch(&turn("Help")).await.expect("help should close");

        assert!(matches!(response.dialog_action, DialogAction::Close { .. }));
    }
}
