use food_storefront_api::{
    config::AppConfig,
    dto::orders::UpdateOrderStatusRequest,
    error::AppError,
    models::OrderStatus,
    routes::params::{ActivityQuery, OrderListQuery, SortOrder},
    services::dashboard_service,
    state::AppState,
};

fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

fn status_query(status: &str) -> OrderListQuery {
    OrderListQuery {
        status: Some(status.to_string()),
        ..Default::default()
    }
}

async fn set_status(state: &AppState, id: i64, status: OrderStatus) -> Result<OrderStatus, AppError> {
    let resp = dashboard_service::update_order_status(state, id, UpdateOrderStatusRequest { status }).await?;
    Ok(resp.data.unwrap().status)
}

#[tokio::test]
async fn summary_counts_live_orders() -> anyhow::Result<()> {
    let state = test_state();
    let summary = dashboard_service::summary(&state).await?.data.unwrap();

    assert_eq!(summary.restaurant.name, "Burger Haven");
    assert_eq!(summary.restaurant.lifetime_orders, 254);
    assert_eq!(summary.new_orders, 1);
    assert_eq!(summary.preparing_orders, 1);
    assert_eq!(summary.ready_orders, 1);

    Ok(())
}

#[tokio::test]
async fn actions_follow_the_status_table() -> anyhow::Result<()> {
    let state = test_state();

    let order = dashboard_service::get_order(&state, 1003).await?.data.unwrap();
    let labels: Vec<&str> = order.actions.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["Mark as Delivered", "Cancel"]);
    assert_eq!(order.time, "40 minutes ago");

    let resp = dashboard_service::update_order_status(
        &state,
        1004,
        UpdateOrderStatusRequest {
            status: OrderStatus::Completed,
        },
    )
    .await?;
    assert_eq!(resp.message, "Order #1004 marked as Completed");
    let order = resp.data.unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert!(order.actions.is_empty());

    let err = set_status(&state, 1004, OrderStatus::Cancelled).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

#[tokio::test]
async fn status_changes_cannot_skip_steps() -> anyhow::Result<()> {
    let state = test_state();

    let err = set_status(&state, 1001, OrderStatus::Ready).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(set_status(&state, 1001, OrderStatus::Preparing).await?, OrderStatus::Preparing);
    assert_eq!(set_status(&state, 1001, OrderStatus::Cancelled).await?, OrderStatus::Cancelled);

    let err = set_status(&state, 1001, OrderStatus::New).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let err = set_status(&state, 4242, OrderStatus::Preparing).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

#[tokio::test]
async fn list_filters_by_status() -> anyhow::Result<()> {
    let state = test_state();

    let resp = dashboard_service::list_orders(&state, OrderListQuery::default()).await?;
    let ids: Vec<i64> = resp.data.unwrap().items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1001, 1002, 1003, 1004, 1005]);

    let resp = dashboard_service::list_orders(&state, status_query("delivered")).await?;
    let ids: Vec<i64> = resp.data.unwrap().items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1004, 1005]);

    let resp = dashboard_service::list_orders(
        &state,
        OrderListQuery {
            status: Some("All".into()),
            sort_order: Some(SortOrder::Asc),
            per_page: Some(2),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(resp.meta.unwrap().total, Some(5));
    let ids: Vec<i64> = resp.data.unwrap().items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1005, 1004]);

    let resp = dashboard_service::list_orders(
        &state,
        OrderListQuery {
            page: Some(i64::MAX),
            ..Default::default()
        },
    )
    .await?;
    assert!(resp.data.unwrap().items.is_empty());

    let resp = dashboard_service::list_orders(&state, status_query("Completed")).await?;
    assert_eq!(resp.message, "You don't have any completed orders at the moment.");
    assert!(resp.data.unwrap().items.is_empty());

    let err = dashboard_service::list_orders(&state, status_query("Shipped"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}

#[tokio::test]
async fn status_changes_are_recorded_in_activity() -> anyhow::Result<()> {
    let state = test_state();
    set_status(&state, 1002, OrderStatus::Ready).await?;

    let entries = dashboard_service::activity(&state, ActivityQuery { limit: Some(10) })
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "order_status_update");
    assert_eq!(entries[0].resource.as_deref(), Some("orders"));

    Ok(())
}
