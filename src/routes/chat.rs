use axum::{Json, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, StatusMessage},
    services::chatbot::detect_intent,
};

pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected chat payload");
        AppError::from(rejection)
    })?;

    let history_len = payload.history.as_ref().map_or(0, Vec::len);
    tracing::debug!(history_len, "chat history ignored");

    let intent = detect_intent(&payload.message);
    tracing::info!(intent = intent.as_str(), "chat intent matched");

    Ok(Json(intent.response()))
}

pub async fn root_handler() -> Json<StatusMessage> {
    Json(StatusMessage::new("Hello from the Nex Rail backend!"))
}

pub async fn hello_handler() -> Json<StatusMessage> {
    Json(StatusMessage::new("Hello from the backend API!"))
}
