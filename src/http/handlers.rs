//! Route handlers translating HTTP requests into use-case calls.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    dto::{CreateMessageRequest, CreateMessageResponse, MessageResponse, messages_response},
    error::ApiError,
};
use crate::message::{domain::MessageId, ports::MessageUseCase};

/// Use case shared across request handlers.
pub type SharedUseCase = Arc<dyn MessageUseCase>;

/// Builds the message API router.
///
/// | Method   | Path             | Success |
/// |----------|------------------|---------|
/// | `POST`   | `/message`       | 201     |
/// | `GET`    | `/message/{id}`  | 200     |
/// | `GET`    | `/messages`      | 200     |
/// | `DELETE` | `/message/{id}`  | 204     |
pub fn router(use_case: SharedUseCase) -> Router {
    Router::new()
        .route("/message", post(create_message))
        .route("/message/{id}", get(get_message).delete(delete_message))
        .route("/messages", get(get_messages))
        .layer(TraceLayer::new_for_http())
        .with_state(use_case)
}

async fn create_message(
    State(use_case): State<SharedUseCase>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateMessageResponse>), ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::invalid_input(rejection.body_text()))?;

    let message = use_case
        .create(request.content)
        .await
        .map_err(|err| ApiError::internal(&err))?;

    Ok((StatusCode::CREATED, Json(CreateMessageResponse::from(&message))))
}

async fn get_message(
    State(use_case): State<SharedUseCase>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = use_case.get_by_id(&MessageId::from(id)).await?;
    Ok(Json(MessageResponse::from(message)))
}

async fn get_messages(
    State(use_case): State<SharedUseCase>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = use_case.get_all().await?;
    Ok(Json(messages_response(messages)))
}

async fn delete_message(
    State(use_case): State<SharedUseCase>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match use_case.delete_by_id(&MessageId::from(id)).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        // Deleting an absent message is not an error for clients.
        Err(err) if err.is_not_found() => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err(ApiError::from(err)),
    }
}
