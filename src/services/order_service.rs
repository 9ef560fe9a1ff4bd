use crate::{
    dto::orders::OrderConfirmation,
    error::AppResult,
    models::Order,
    pricing::{DELIVERY_FEE, tax},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Builds the order-success view; money is recomputed from the order lines.
pub fn confirmation_for(state: &AppState, order: &Order) -> OrderConfirmation {
    let restaurant = state.catalog.find(order.restaurant_id);
    let subtotal: i64 = order
        .items
        .iter()
        .map(|line| line.price * i64::from(line.quantity))
        .sum();
    let tax = tax(subtotal);

    OrderConfirmation {
        order_number: order.order_number(),
        eta: restaurant
            .map(|r| r.delivery_time.clone())
            .unwrap_or_else(|| "30-45 min".to_string()),
        restaurant_name: restaurant.map(|r| r.name.clone()).unwrap_or_default(),
        items: order.items.clone(),
        subtotal,
        delivery_fee: DELIVERY_FEE,
        tax,
        total: subtotal + DELIVERY_FEE + tax,
        address: order.address.clone(),
        status: order.status,
    }
}

pub async fn get_confirmation(
    state: &AppState,
    id: i64,
) -> AppResult<ApiResponse<OrderConfirmation>> {
    let order = state.orders.get(id).await?;
    Ok(ApiResponse::success(
        "Order placed",
        confirmation_for(state, &order),
        Some(Meta::empty()),
    ))
}
