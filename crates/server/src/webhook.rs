//! The inbound webhook: Twilio form in, TwiML out. One isolated unit of work
//! per request; the handler always answers, whatever the interpreter hit.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Router};
use tower_http::trace::TraceLayer;

use libreta_bot::{reply, Interpreter};

use crate::twilio::{twiml, TwilioWebhook};

#[derive(Clone)]
pub struct AppState {
    pub interpreter: Arc<Interpreter>,
}

pub fn router(interpreter: Arc<Interpreter>) -> Router {
    Router::new()
        .route("/webhook", post(receive))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { interpreter })
}

async fn receive(State(state): State<AppState>, Form(form): Form<TwilioWebhook>) -> impl IntoResponse {
    let message = form.into_message();
    tracing::debug!(sender = %message.sender, has_media = message.media_url.is_some(), "inbound message");
    let outcome = state.interpreter.handle(&message).await;
    let body = reply::render(&outcome);
    ([(header::CONTENT_TYPE, "application/xml")], twiml(&body))
}
