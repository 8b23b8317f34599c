use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::error;

use scoops_fulfillment::Dispatcher;
use scoops_lex::{DialogTurn, LexResponse};

#[derive(Clone)]
pub struct TurnState {
    dispatcher: Arc<Dispatcher>,
}

pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/fulfillment", post(fulfillment))
        .with_state(TurnState { dispatcher })
}

/// One dialog turn per request. Slot violations and lookup misses come back
/// as dialog actions; unsupported intents and store failures terminate the
/// turn as a 500 with no body, matching the fatal-error contract.
pub async fn fulfillment(
    State(state): State<TurnState>,
    Json(turn): Json<DialogTurn>,
) -> Result<Json<LexResponse>, StatusCode> {
    match state.dispatcher.dispatch(&turn).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            error!(
                event_name = "dialog.turn_failed",
                intent = %turn.current_intent.name,
                user_id = %turn.user_id(),
                error = %error,
                "dialog turn terminated with an unhandled error"
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    use scoops_core::{Product, ProductId};
    use scoops_db::{InMemoryCatalogGateway, InMemoryOrderGateway};
    use scoops_fulfillment::Dispatcher;
    use scoops_lex::{CurrentIntent, DialogTurn, InvocationSource, Slots};

    use super::router;

    fn test_router() -> axum::Router {
        let catalog = InMemoryCatalogGateway::with_products(vec![Product {
            id: ProductId(1),
            product_type: "ice cream".to_string(),
            flavor: "vanilla".to_string(),
        }]);
        router(Arc::new(Dispatcher::new(
            Arc::new(catalog),
            Arc::new(InMemoryOrderGateway::default()),
        )))
    }

    fn turn_request(intent_name: &str) -> Request<Body> {
        let turn = DialogTurn {
            invocation_source: InvocationSource::FulfillmentCodeHook,
            current_intent: CurrentIntent { name: intent_name.to_string(), slots: Slots::new() },
            session_attributes: None,
            user_id: None,
        };
        Request::builder()
            .method("POST")
            .uri("/fulfillment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&turn).expect("turn should serialize")))
            .expect("request should build")
    }

    #[tokio::test]
    async fn known_intent_returns_a_dialog_action() {
        let response = test_router()
            .oneshot(turn_request("Help"))
            .await
            .expect("router should answer");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unsupported_intent_is_a_server_error() {
        let response = test_router()
            .oneshot(turn_request("Unsupported"))
            .await
            .expect("router should answer");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
