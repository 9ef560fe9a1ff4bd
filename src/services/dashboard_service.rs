use chrono::Utc;

use crate::{
    audit::log_audit,
    dto::orders::{ActivityList, OrderList, OrderView, OwnerSummary, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    models::{Order, OrderStatus, StatusFilter},
    response::{ApiResponse, Meta},
    routes::params::{ActivityQuery, OrderListQuery, SortOrder},
    seed::owner_profile,
    state::AppState,
};

/// Fetches an order, hiding orders of other restaurants.
async fn owned_order(state: &AppState, id: i64) -> AppResult<Order> {
    let order = state.orders.get(id).await?;
    if order.restaurant_id != state.config.owner_restaurant_id {
        return Err(AppError::NotFound);
    }
    Ok(order)
}

pub async fn summary(state: &AppState) -> AppResult<ApiResponse<OwnerSummary>> {
    let restaurant = state
        .catalog
        .find(state.config.owner_restaurant_id)
        .ok_or(AppError::NotFound)?;
    let orders = state.orders.list(restaurant.id).await?;
    let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

    Ok(ApiResponse::success(
        "Dashboard",
        OwnerSummary {
            restaurant: owner_profile(restaurant),
            new_orders: count(OrderStatus::New),
            preparing_orders: count(OrderStatus::Preparing),
            ready_orders: count(OrderStatus::Ready),
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let filter: StatusFilter = query
        .status
        .as_deref()
        .unwrap_or("All")
        .parse()
        .map_err(AppError::BadRequest)?;

    let mut orders: Vec<Order> = state
        .orders
        .list(state.config.owner_restaurant_id)
        .await?
        .into_iter()
        .filter(|o| filter.matches(o.status))
        .collect();
    match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => orders.sort_by_key(|o| o.placed_at),
        SortOrder::Desc => orders.sort_by_key(|o| std::cmp::Reverse(o.placed_at)),
    }

    let total = orders.len() as i64;
    let (orders, page, per_page) = query.pagination().apply(orders);
    let now = Utc::now();
    let items: Vec<OrderView> = orders.into_iter().map(|o| OrderView::new(o, now)).collect();

    let message = match (total, filter) {
        (0, StatusFilter::All) => "You don't have any orders yet.".to_string(),
        (0, StatusFilter::Only(status)) => format!(
            "You don't have any {} orders at the moment.",
            status.as_str().to_lowercase()
        ),
        _ => "Orders".to_string(),
    };
    Ok(ApiResponse::success(
        message,
        OrderList { items },
        Some(Meta::new(page, per_page, total)),
    ))
}

pub async fn get_order(state: &AppState, id: i64) -> AppResult<ApiResponse<OrderView>> {
    let order = owned_order(state, id).await?;
    Ok(ApiResponse::success(
        "Order found",
        OrderView::new(order, Utc::now()),
        Some(Meta::empty()),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    id: i64,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<OrderView>> {
    owned_order(state, id).await?;
    let order = state
        .orders
        .update_status(id, payload.status)
        .await
        .inspect_err(|err| tracing::warn!(order_id = id, error = %err, "status change rejected"))?;

    log_audit(
        state,
        "order_status_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "status": order.status })),
    )
    .await;

    Ok(ApiResponse::success(
        format!("Order #{} marked as {}", order.id, order.status),
        OrderView::new(order, Utc::now()),
        Some(Meta::empty()),
    ))
}

pub async fn activity(
    state: &AppState,
    query: ActivityQuery,
) -> AppResult<ApiResponse<ActivityList>> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let items = state.audit.recent(limit).await;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Activity", ActivityList { items }, Some(meta)))
}
