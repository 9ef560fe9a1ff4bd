use uuid::Uuid;

use crate::{
    audit::log_audit,
    cart::Cart,
    dto::cart::{AddToCartRequest, AdjustQuantityRequest, CartView, CreateCartRequest},
    error::{AppError, AppResult},
    models::Restaurant,
    response::{ApiResponse, Meta},
    state::{AppState, CartSession},
};

fn cart_view(id: Uuid, restaurant: &Restaurant, session: &CartSession) -> CartView {
    let totals = session.cart.totals();
    CartView {
        id,
        restaurant_id: restaurant.id,
        restaurant_name: restaurant.name.clone(),
        lines: session.cart.lines().to_vec(),
        item_count: session.cart.lines().iter().map(|l| l.quantity).sum(),
        meets_min_order: totals.subtotal >= restaurant.min_order,
        min_order: restaurant.min_order,
        totals,
    }
}

pub async fn create_cart(
    state: &AppState,
    payload: CreateCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let restaurant = state
        .catalog
        .find(payload.restaurant_id)
        .ok_or_else(|| AppError::BadRequest("restaurant not found".to_string()))?;

    let session = CartSession {
        restaurant_id: restaurant.id,
        cart: Cart::new(),
    };
    let id = state.carts.insert(session.clone()).await;
    tracing::debug!(cart_id = %id, restaurant_id = restaurant.id, "cart opened");

    Ok(ApiResponse::success(
        "Cart created",
        cart_view(id, restaurant, &session),
        Some(Meta::empty()),
    ))
}

pub async fn get_cart(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CartView>> {
    let catalog = state.catalog.clone();
    let view = state
        .carts
        .read(id, |session| {
            catalog
                .find(session.restaurant_id)
                .map(|restaurant| cart_view(id, restaurant, session))
                .ok_or(AppError::NotFound)
        })
        .await??;

    let meta = Meta::total(view.lines.len());
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

pub async fn add_to_cart(
    state: &AppState,
    id: Uuid,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let catalog = state.catalog.clone();
    let (name, view) = state
        .carts
        .update(id, |session| {
            let restaurant = catalog
                .find(session.restaurant_id)
                .ok_or(AppError::NotFound)?;
            let item = restaurant
                .menu_item(payload.menu_item_id)
                .ok_or_else(|| AppError::BadRequest("menu item not found".to_string()))?;
            session.cart.add(item)?;
            Ok::<_, AppError>((item.name.clone(), cart_view(id, restaurant, session)))
        })
        .await??;

    log_audit(
        state,
        "cart_add",
        Some("carts"),
        Some(serde_json::json!({ "cart_id": id, "menu_item_id": payload.menu_item_id })),
    )
    .await;

    Ok(ApiResponse::success(
        format!("{name} added to cart"),
        view,
        None,
    ))
}

pub async fn adjust_quantity(
    state: &AppState,
    id: Uuid,
    item_id: i64,
    payload: AdjustQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    if payload.delta == 0 {
        return Err(AppError::BadRequest("delta must not be 0".into()));
    }

    let catalog = state.catalog.clone();
    let (quantity, view) = state
        .carts
        .update(id, |session| {
            let restaurant = catalog
                .find(session.restaurant_id)
                .ok_or(AppError::NotFound)?;
            if session.cart.quantity_of(item_id) == 0 {
                return Err(AppError::NotFound);
            }
            let quantity = session.cart.adjust(item_id, payload.delta)?;
            Ok::<_, AppError>((quantity, cart_view(id, restaurant, session)))
        })
        .await??;

    log_audit(
        state,
        "cart_adjust",
        Some("carts"),
        Some(serde_json::json!({ "cart_id": id, "menu_item_id": item_id, "delta": payload.delta })),
    )
    .await;

    let message = if quantity == 0 {
        "Removed from cart"
    } else {
        "Quantity updated"
    };
    Ok(ApiResponse::success(message, view, None))
}

pub async fn remove_cart(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    state.carts.remove(id).await?;

    Ok(ApiResponse::success(
        "Cart discarded",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
