use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use food_storefront_api::{
    cart::MAX_LINE_QUANTITY,
    checkout::CheckoutStep,
    config::AppConfig,
    dto::{
        cart::{AddToCartRequest, AdjustQuantityRequest, CreateCartRequest},
        checkout::{PaymentRequest, StartCheckoutRequest},
    },
    error::{AppError, AppResult},
    models::{CardInfo, DeliveryInfo, Order, OrderStatus, PaymentMethod},
    routes::params::OrderListQuery,
    services::{cart_service, checkout_service, dashboard_service, order_service},
    state::AppState,
    store::{MemoryOrderStore, NewOrder, OrderStore},
};
use uuid::Uuid;

fn test_state() -> AppState {
    AppState::new(AppConfig {
        order_submit_delay: Duration::ZERO,
        registration_submit_delay: Duration::ZERO,
        ..AppConfig::default()
    })
}

fn delivery() -> DeliveryInfo {
    DeliveryInfo {
        name: "Jane Roe".into(),
        phone: "555-0100".into(),
        address: "12 Elm St".into(),
        city: "Anytown".into(),
        zip_code: "12345".into(),
        instructions: "Ring twice".into(),
    }
}

async fn add(state: &AppState, cart_id: Uuid, menu_item_id: i64) -> anyhow::Result<()> {
    cart_service::add_to_cart(state, cart_id, AddToCartRequest { menu_item_id }).await?;
    Ok(())
}

/// Order backend that refuses every write.
struct OfflineOrderStore;

#[async_trait]
impl OrderStore for OfflineOrderStore {
    async fn create(&self, _order: NewOrder) -> AppResult<Order> {
        Err(anyhow::anyhow!("order backend offline").into())
    }

    async fn get(&self, _id: i64) -> AppResult<Order> {
        Err(AppError::NotFound)
    }

    async fn list(&self, _restaurant_id: i64) -> AppResult<Vec<Order>> {
        Ok(Vec::new())
    }

    async fn update_status(&self, _id: i64, _status: OrderStatus) -> AppResult<Order> {
        Err(AppError::NotFound)
    }
}

/// Drives a fresh checkout for `cart_id` to the review step with PayPal.
async fn checkout_at_review(state: &AppState, cart_id: Uuid) -> anyhow::Result<Uuid> {
    let id = checkout_service::start_checkout(state, StartCheckoutRequest { cart_id })
        .await?
        .data
        .unwrap()
        .id;
    checkout_service::update_delivery(state, id, delivery()).await?;
    checkout_service::next_step(state, id).await?;
    checkout_service::update_payment(
        state,
        id,
        PaymentRequest {
            method: PaymentMethod::PayPal,
            card: None,
        },
    )
    .await?;
    checkout_service::next_step(state, id).await?;
    Ok(id)
}

/// Two cheeseburgers, fries and two soft drinks: $26.95.
async fn filled_cart(state: &AppState) -> anyhow::Result<Uuid> {
    let cart = cart_service::create_cart(state, CreateCartRequest { restaurant_id: 1 })
        .await?
        .data
        .unwrap();
    for item in [101, 101, 104, 106, 106] {
        add(state, cart.id, item).await?;
    }
    Ok(cart.id)
}

#[tokio::test]
async fn cart_merges_lines_and_prunes_zero_quantity() -> anyhow::Result<()> {
    let state = test_state();
    let cart = cart_service::create_cart(&state, CreateCartRequest { restaurant_id: 1 })
        .await?
        .data
        .unwrap();
    assert!(cart.lines.is_empty());

    let resp = cart_service::add_to_cart(&state, cart.id, AddToCartRequest { menu_item_id: 101 }).await?;
    assert_eq!(resp.message, "Classic Cheeseburger added to cart");
    let view = resp.data.unwrap();
    assert!(!view.meets_min_order);

    let view = cart_service::add_to_cart(&state, cart.id, AddToCartRequest { menu_item_id: 101 })
        .await?
        .data
        .unwrap();
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].quantity, 2);
    assert!(view.meets_min_order);

    add(&state, cart.id, 106).await?;
    let resp = cart_service::adjust_quantity(&state, cart.id, 106, AdjustQuantityRequest { delta: -1 }).await?;
    assert_eq!(resp.message, "Removed from cart");
    let view = resp.data.unwrap();
    assert!(view.lines.iter().all(|l| l.item_id != 106));

    let resp = cart_service::adjust_quantity(&state, cart.id, 101, AdjustQuantityRequest { delta: -1 }).await?;
    assert_eq!(resp.message, "Quantity updated");
    assert_eq!(resp.data.unwrap().item_count, 1);

    let err = cart_service::adjust_quantity(&state, cart.id, 106, AdjustQuantityRequest { delta: 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // items from another restaurant's menu are rejected
    let err = cart_service::add_to_cart(&state, cart.id, AddToCartRequest { menu_item_id: 201 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}

#[tokio::test]
async fn cart_rejects_quantities_past_the_line_limit() -> anyhow::Result<()> {
    let state = test_state();
    let cart = cart_service::create_cart(&state, CreateCartRequest { restaurant_id: 1 })
        .await?
        .data
        .unwrap();
    add(&state, cart.id, 101).await?;

    let err = cart_service::adjust_quantity(&state, cart.id, 101, AdjustQuantityRequest { delta: i32::MAX })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    let view = cart_service::get_cart(&state, cart.id).await?.data.unwrap();
    assert_eq!(view.lines[0].quantity, 1);

    let delta = MAX_LINE_QUANTITY as i32 - 1;
    cart_service::adjust_quantity(&state, cart.id, 101, AdjustQuantityRequest { delta }).await?;
    let err = cart_service::add_to_cart(&state, cart.id, AddToCartRequest { menu_item_id: 101 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let view = cart_service::get_cart(&state, cart.id).await?.data.unwrap();
    assert_eq!(view.lines[0].quantity, MAX_LINE_QUANTITY);
    assert_eq!(view.item_count, MAX_LINE_QUANTITY);

    Ok(())
}

#[tokio::test]
async fn cart_totals_add_delivery_fee() -> anyhow::Result<()> {
    let state = test_state();
    let cart_id = filled_cart(&state).await?;

    let view = cart_service::get_cart(&state, cart_id).await?.data.unwrap();
    assert_eq!(view.totals.subtotal, 2695);
    assert_eq!(view.totals.delivery_fee, 299);
    assert_eq!(view.totals.total, 2994);
    assert_eq!(view.item_count, 5);

    Ok(())
}

#[tokio::test]
async fn checkout_rejects_missing_or_empty_cart() -> anyhow::Result<()> {
    let state = test_state();

    let err = checkout_service::start_checkout(&state, StartCheckoutRequest { cart_id: Uuid::new_v4() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let cart = cart_service::create_cart(&state, CreateCartRequest { restaurant_id: 1 })
        .await?
        .data
        .unwrap();
    let err = checkout_service::start_checkout(&state, StartCheckoutRequest { cart_id: cart.id })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Cart is empty"));

    Ok(())
}

#[tokio::test]
async fn checkout_wizard_places_order() -> anyhow::Result<()> {
    let state = test_state();
    let cart_id = filled_cart(&state).await?;

    let checkout = checkout_service::start_checkout(&state, StartCheckoutRequest { cart_id })
        .await?
        .data
        .unwrap();
    assert_eq!(checkout.step, CheckoutStep::Delivery);
    assert_eq!(checkout.totals.tax, 216);
    assert_eq!(checkout.totals.total, 3210);
    let id = checkout.id;

    // blank phone blocks the delivery step
    let mut info = delivery();
    info.phone = String::new();
    checkout_service::update_delivery(&state, id, info).await?;
    let err = checkout_service::next_step(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Please fill out all required fields"));

    checkout_service::update_delivery(&state, id, delivery()).await?;
    let view = checkout_service::next_step(&state, id).await?.data.unwrap();
    assert_eq!(view.step, CheckoutStep::Payment);
    assert_eq!(view.step_number, 2);

    // card is the default method and needs every card field
    let err = checkout_service::next_step(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Please fill out all card information"));

    checkout_service::update_payment(
        &state,
        id,
        PaymentRequest {
            method: PaymentMethod::PayPal,
            card: None,
        },
    )
    .await?;
    let view = checkout_service::next_step(&state, id).await?.data.unwrap();
    assert_eq!(view.step, CheckoutStep::Review);

    let view = checkout_service::previous_step(&state, id).await?.data.unwrap();
    assert_eq!(view.step, CheckoutStep::Payment);
    assert_eq!(view.delivery.phone, "555-0100");
    assert_eq!(view.payment_method, PaymentMethod::PayPal);
    checkout_service::next_step(&state, id).await?;

    let resp = checkout_service::submit_order(&state, id).await?;
    assert_eq!(resp.message, "Your order has been placed successfully!");
    let placed = resp.data.unwrap();
    assert_eq!(placed.order_id, 1006);
    assert_eq!(placed.redirect, "/order-success/1006");
    assert_eq!(placed.confirmation.order_number, "ORD-1006");
    assert_eq!(placed.confirmation.total, 3210);
    assert_eq!(placed.confirmation.eta, "20-30 min");
    assert_eq!(state.carts.len().await, 0);
    assert_eq!(state.checkouts.len().await, 0);

    // the checkout ends with the order
    let err = checkout_service::submit_order(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let confirmation = order_service::get_confirmation(&state, 1006).await?.data.unwrap();
    assert_eq!(confirmation.status, OrderStatus::New);
    assert_eq!(confirmation.address, "12 Elm St, Anytown 12345");

    let orders = dashboard_service::list_orders(
        &state,
        OrderListQuery {
            status: Some("New".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .unwrap()
    .items;
    let placed_order = orders.iter().find(|o| o.id == 1006).expect("placed order listed");
    assert_eq!(placed_order.customer_name, "Jane Roe");
    assert_eq!(placed_order.payment, "PayPal");
    assert_eq!(placed_order.time, "just now");

    let activity = state.audit.recent(1).await;
    assert_eq!(activity[0].action, "order_placed");

    Ok(())
}

#[tokio::test]
async fn card_payment_masks_card_details() -> anyhow::Result<()> {
    let state = test_state();
    let cart_id = filled_cart(&state).await?;
    let id = checkout_service::start_checkout(&state, StartCheckoutRequest { cart_id })
        .await?
        .data
        .unwrap()
        .id;

    checkout_service::update_delivery(&state, id, delivery()).await?;
    checkout_service::next_step(&state, id).await?;
    let view = checkout_service::update_payment(
        &state,
        id,
        PaymentRequest {
            method: PaymentMethod::Card,
            card: Some(CardInfo {
                number: "4242 4242 4242 4242".into(),
                name: "Jane Roe".into(),
                expiry: "12/30".into(),
                cvc: "123".into(),
            }),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(view.card.number, "**** 4242");
    assert_eq!(view.card.cvc, "***");

    let view = checkout_service::next_step(&state, id).await?.data.unwrap();
    assert_eq!(view.step, CheckoutStep::Review);

    Ok(())
}

#[tokio::test]
async fn orders_of_other_restaurants_stay_off_the_dashboard() -> anyhow::Result<()> {
    let state = test_state();
    let cart = cart_service::create_cart(&state, CreateCartRequest { restaurant_id: 2 })
        .await?
        .data
        .unwrap();
    add(&state, cart.id, 201).await?;

    let id = checkout_at_review(&state, cart.id).await?;
    let placed = checkout_service::submit_order(&state, id).await?.data.unwrap();
    assert_eq!(placed.confirmation.restaurant_name, "Pasta Paradise");

    let err = dashboard_service::get_order(&state, placed.order_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

#[tokio::test]
async fn a_cart_backs_a_single_checkout() -> anyhow::Result<()> {
    let state = test_state();
    let cart_id = filled_cart(&state).await?;

    let first = checkout_service::start_checkout(&state, StartCheckoutRequest { cart_id }).await?;
    assert!(first.data.is_some());
    assert_eq!(state.carts.len().await, 0);

    let err = checkout_service::start_checkout(&state, StartCheckoutRequest { cart_id })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(state.checkouts.len().await, 1);

    // the snapshot can no longer change underneath the checkout
    let err = cart_service::add_to_cart(&state, cart_id, AddToCartRequest { menu_item_id: 101 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

#[tokio::test]
async fn failed_order_write_keeps_checkout_open() -> anyhow::Result<()> {
    let mut state = test_state();
    state.orders = Arc::new(OfflineOrderStore);
    let cart_id = filled_cart(&state).await?;
    let id = checkout_at_review(&state, cart_id).await?;

    let err = checkout_service::submit_order(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
    let view = checkout_service::get_checkout(&state, id).await?.data.unwrap();
    assert_eq!(view.step, CheckoutStep::Review);
    assert_eq!(view.delivery.name, "Jane Roe");

    // once the backend is back the same checkout goes through
    state.orders = Arc::new(MemoryOrderStore::new(Vec::new()));
    let placed = checkout_service::submit_order(&state, id).await?.data.unwrap();
    assert_eq!(placed.confirmation.total, 3210);
    assert_eq!(state.checkouts.len().await, 0);

    Ok(())
}
