//! Order operations: read by id, save, and the DELETE / PUT placeholders.

use crate::error::AppError;
use crate::model::Order;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Found orders are answered with 202; an unknown id gets 400 with no body.
pub async fn get_operation(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Response, AppError> {
    match state.orders.find_by_id(order_id).await? {
        Some(order) => Ok((StatusCode::ACCEPTED, Json(order)).into_response()),
        None => {
            tracing::debug!(order_id, "order not found");
            Ok(StatusCode::BAD_REQUEST.into_response())
        }
    }
}

pub async fn post_operation(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let id = order.id;
    let saved = state.orders.save(order).await?.ok_or_else(|| {
        tracing::warn!(id, "save returned no row");
        AppError::Internal("Order not created".into())
    })?;
    tracing::info!(id = saved.id, "order saved");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Placeholder: touches no data.
pub async fn delete_operation() -> &'static str {
    "Delete"
}

/// Placeholder: touches no data.
pub async fn put_operation() -> &'static str {
    "Put"
}
