use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::orders::OrderConfirmation,
    error::AppResult,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/confirmation", get(get_confirmation))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/confirmation",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order-success details", body = ApiResponse<OrderConfirmation>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_confirmation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OrderConfirmation>>> {
    let resp = order_service::get_confirmation(&state, id).await?;
    Ok(Json(resp))
}
