use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::orders::{ActivityList, OrderList, OrderView, OwnerSummary, UpdateOrderStatusRequest},
    error::AppResult,
    response::ApiResponse,
    routes::params::{ActivityQuery, OrderListQuery},
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary))
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/activity", get(activity))
}

#[utoipa::path(
    get,
    path = "/api/owner/summary",
    responses(
        (status = 200, description = "Restaurant card and live order counts", body = ApiResponse<OwnerSummary>),
    ),
    tag = "Owner"
)]
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<ApiResponse<OwnerSummary>>> {
    let resp = dashboard_service::summary(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/owner/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders, optionally filtered by status", body = ApiResponse<OrderList>),
        (status = 400, description = "Unknown status filter"),
    ),
    tag = "Owner"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = dashboard_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/owner/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its available actions", body = ApiResponse<OrderView>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Owner"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OrderView>>> {
    let resp = dashboard_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/owner/orders/{id}/status",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<OrderView>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Transition not allowed"),
    ),
    tag = "Owner"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderView>>> {
    let resp = dashboard_service::update_order_status(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/owner/activity",
    params(ActivityQuery),
    responses(
        (status = 200, description = "Recent audit entries, newest first", body = ApiResponse<ActivityList>),
    ),
    tag = "Owner"
)]
pub async fn activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<ApiResponse<ActivityList>>> {
    let resp = dashboard_service::activity(&state, query).await?;
    Ok(Json(resp))
}
