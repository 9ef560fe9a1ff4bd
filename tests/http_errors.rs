use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use food_storefront_api::{
    config::AppConfig,
    dto::{checkout::StartCheckoutRequest, orders::UpdateOrderStatusRequest},
    models::OrderStatus,
    routes::{checkout, owner, params::OrderListQuery, restaurants},
    state::AppState,
};
use uuid::Uuid;

fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

#[tokio::test]
async fn handler_errors_map_to_status_codes() {
    let state = test_state();

    let err = restaurants::get_restaurant(State(state.clone()), Path(999))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

    let err = checkout::start_checkout(
        State(state.clone()),
        Json(StartCheckoutRequest {
            cart_id: Uuid::new_v4(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let err = owner::update_order_status(
        State(state.clone()),
        Path(1005),
        Json(UpdateOrderStatusRequest {
            status: OrderStatus::New,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

    let err = owner::list_orders(
        State(state),
        Query(OrderListQuery {
            status: Some("Lost".into()),
            ..Default::default()
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn handlers_wrap_data_in_the_envelope() -> anyhow::Result<()> {
    let state = test_state();

    let Json(resp) = owner::get_order(State(state), Path(1002)).await?;
    assert_eq!(resp.message, "Order found");
    let order = resp.data.unwrap();
    assert_eq!(order.customer_name, "Sarah Johnson");
    assert_eq!(order.status, OrderStatus::Preparing);
    assert!(resp.meta.is_some());

    Ok(())
}
