use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, AdjustQuantityRequest, CartView, CreateCartRequest},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{id}", get(get_cart).delete(remove_cart))
        .route("/{id}/items", post(add_to_cart))
        .route("/{id}/items/{item_id}", patch(adjust_quantity))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    request_body = CreateCartRequest,
    responses(
        (status = 200, description = "Open an empty cart for a restaurant", body = ApiResponse<CartView>),
        (status = 400, description = "Restaurant not found"),
    ),
    tag = "Cart"
)]
pub async fn create_cart(
    State(state): State<AppState>,
    Json(payload): Json<CreateCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::create_cart(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart lines and totals", body = ApiResponse<CartView>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::get_cart(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/items",
    params(
        ("id" = Uuid, Path, description = "Cart ID")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add one unit of a menu item", body = ApiResponse<CartView>),
        (status = 400, description = "Menu item not found, or line already at its limit"),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::add_to_cart(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/carts/{id}/items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Cart ID"),
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    request_body = AdjustQuantityRequest,
    responses(
        (status = 200, description = "Change a line's quantity; lines reaching 0 are removed", body = ApiResponse<CartView>),
        (status = 400, description = "Zero delta, or quantity past the line limit"),
        (status = 404, description = "Cart or line not found"),
    ),
    tag = "Cart"
)]
pub async fn adjust_quantity(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, i64)>,
    Json(payload): Json<AdjustQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::adjust_quantity(&state, id, item_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart discarded", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::remove_cart(&state, id).await?;
    Ok(Json(resp))
}
