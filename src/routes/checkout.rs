use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::checkout::{CheckoutView, OrderPlaced, PaymentRequest, StartCheckoutRequest},
    error::AppResult,
    models::DeliveryInfo,
    response::ApiResponse,
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_checkout))
        .route("/{id}", get(get_checkout))
        .route("/{id}/delivery", put(update_delivery))
        .route("/{id}/payment", put(update_payment))
        .route("/{id}/next", post(next_step))
        .route("/{id}/back", post(previous_step))
        .route("/{id}/submit", post(submit_order))
}

#[utoipa::path(
    post,
    path = "/api/checkouts",
    request_body = StartCheckoutRequest,
    responses(
        (status = 200, description = "Open a checkout at the delivery step", body = ApiResponse<CheckoutView>),
        (status = 400, description = "Cart missing, empty, or already checked out"),
    ),
    tag = "Checkout"
)]
pub async fn start_checkout(
    State(state): State<AppState>,
    Json(payload): Json<StartCheckoutRequest>,
) -> AppResult<Json<ApiResponse<CheckoutView>>> {
    let resp = checkout_service::start_checkout(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/checkouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Checkout ID")
    ),
    responses(
        (status = 200, description = "Current step and form data", body = ApiResponse<CheckoutView>),
        (status = 404, description = "Checkout not found"),
    ),
    tag = "Checkout"
)]
pub async fn get_checkout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CheckoutView>>> {
    let resp = checkout_service::get_checkout(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/checkouts/{id}/delivery",
    params(
        ("id" = Uuid, Path, description = "Checkout ID")
    ),
    request_body = DeliveryInfo,
    responses(
        (status = 200, description = "Delivery information saved", body = ApiResponse<CheckoutView>),
        (status = 404, description = "Checkout not found"),
        (status = 409, description = "Order already submitted"),
    ),
    tag = "Checkout"
)]
pub async fn update_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DeliveryInfo>,
) -> AppResult<Json<ApiResponse<CheckoutView>>> {
    let resp = checkout_service::update_delivery(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/checkouts/{id}/payment",
    params(
        ("id" = Uuid, Path, description = "Checkout ID")
    ),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment method saved", body = ApiResponse<CheckoutView>),
        (status = 404, description = "Checkout not found"),
        (status = 409, description = "Order already submitted"),
    ),
    tag = "Checkout"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<Json<ApiResponse<CheckoutView>>> {
    let resp = checkout_service::update_payment(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/checkouts/{id}/next",
    params(
        ("id" = Uuid, Path, description = "Checkout ID")
    ),
    responses(
        (status = 200, description = "Advanced one step", body = ApiResponse<CheckoutView>),
        (status = 400, description = "Required fields missing"),
        (status = 409, description = "No forward step from here"),
    ),
    tag = "Checkout"
)]
pub async fn next_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CheckoutView>>> {
    let resp = checkout_service::next_step(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/checkouts/{id}/back",
    params(
        ("id" = Uuid, Path, description = "Checkout ID")
    ),
    responses(
        (status = 200, description = "Went back one step", body = ApiResponse<CheckoutView>),
        (status = 409, description = "No previous step"),
    ),
    tag = "Checkout"
)]
pub async fn previous_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CheckoutView>>> {
    let resp = checkout_service::previous_step(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/checkouts/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Checkout ID")
    ),
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<OrderPlaced>),
        (status = 404, description = "Checkout not found or already completed"),
        (status = 409, description = "Not at the review step, or a submit is in flight"),
        (status = 500, description = "Order could not be recorded; the checkout stays at review"),
    ),
    tag = "Checkout"
)]
pub async fn submit_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderPlaced>>> {
    let resp = checkout_service::submit_order(&state, id).await?;
    Ok(Json(resp))
}
