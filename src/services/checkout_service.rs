use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    checkout::CheckoutWizard,
    dto::checkout::{CheckoutView, OrderPlaced, PaymentRequest, StartCheckoutRequest},
    error::{AppError, AppResult},
    models::{DeliveryInfo, OrderLine},
    response::{ApiResponse, Meta},
    services::order_service::confirmation_for,
    state::{AppState, CheckoutSession},
    store::NewOrder,
};

fn checkout_view(state: &AppState, id: Uuid, wizard: &CheckoutWizard) -> CheckoutView {
    let restaurant_name = state
        .catalog
        .find(wizard.restaurant_id())
        .map(|r| r.name.clone())
        .unwrap_or_default();
    CheckoutView {
        id,
        step: wizard.step(),
        step_number: wizard.step().number(),
        restaurant_id: wizard.restaurant_id(),
        restaurant_name,
        lines: wizard.lines().to_vec(),
        delivery: wizard.delivery().clone(),
        payment_method: wizard.payment_method(),
        card: wizard.card().redacted(),
        totals: wizard.totals(),
    }
}

pub async fn start_checkout(
    state: &AppState,
    payload: StartCheckoutRequest,
) -> AppResult<ApiResponse<CheckoutView>> {
    // The cart moves into the checkout, so it cannot be edited or checked out twice.
    let cart = state
        .carts
        .take_if(payload.cart_id, |session| {
            if session.cart.is_empty() {
                Err(AppError::BadRequest("Cart is empty".into()))
            } else {
                Ok(())
            }
        })
        .await
        .map_err(|_| AppError::BadRequest("cart not found".into()))??;

    let wizard = CheckoutWizard::new(cart.restaurant_id, cart.cart.lines().to_vec());
    let view_wizard = wizard.clone();
    let id = state
        .checkouts
        .insert(CheckoutSession {
            cart_id: payload.cart_id,
            wizard,
        })
        .await;
    tracing::debug!(checkout_id = %id, cart_id = %payload.cart_id, "checkout started");

    Ok(ApiResponse::success(
        "Checkout started",
        checkout_view(state, id, &view_wizard),
        Some(Meta::empty()),
    ))
}

pub async fn get_checkout(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CheckoutView>> {
    let wizard = state.checkouts.read(id, |s| s.wizard.clone()).await?;
    Ok(ApiResponse::success(
        "OK",
        checkout_view(state, id, &wizard),
        None,
    ))
}

pub async fn update_delivery(
    state: &AppState,
    id: Uuid,
    payload: DeliveryInfo,
) -> AppResult<ApiResponse<CheckoutView>> {
    let wizard = state
        .checkouts
        .update(id, |s| {
            s.wizard.set_delivery(payload)?;
            Ok::<_, AppError>(s.wizard.clone())
        })
        .await??;

    Ok(ApiResponse::success(
        "Delivery information saved",
        checkout_view(state, id, &wizard),
        None,
    ))
}

pub async fn update_payment(
    state: &AppState,
    id: Uuid,
    payload: PaymentRequest,
) -> AppResult<ApiResponse<CheckoutView>> {
    let wizard = state
        .checkouts
        .update(id, |s| {
            s.wizard.set_payment(payload.method, payload.card)?;
            Ok::<_, AppError>(s.wizard.clone())
        })
        .await??;

    Ok(ApiResponse::success(
        "Payment method saved",
        checkout_view(state, id, &wizard),
        None,
    ))
}

pub async fn next_step(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CheckoutView>> {
    let wizard = state
        .checkouts
        .update(id, |s| {
            s.wizard.advance()?;
            Ok::<_, AppError>(s.wizard.clone())
        })
        .await?
        .inspect_err(|err| tracing::warn!(checkout_id = %id, error = %err, "checkout step rejected"))?;

    Ok(ApiResponse::success(
        format!("Moved to {} step", wizard.step()),
        checkout_view(state, id, &wizard),
        None,
    ))
}

pub async fn previous_step(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CheckoutView>> {
    let wizard = state
        .checkouts
        .update(id, |s| {
            s.wizard.back()?;
            Ok::<_, AppError>(s.wizard.clone())
        })
        .await??;

    Ok(ApiResponse::success(
        format!("Moved to {} step", wizard.step()),
        checkout_view(state, id, &wizard),
        None,
    ))
}

/// Places the order, waits the configured delay, and returns the
/// confirmation to navigate to. The checkout session ends with the order.
pub async fn submit_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<OrderPlaced>> {
    let (wizard, totals, cart_id) = state
        .checkouts
        .update(id, |s| {
            let totals = s.wizard.submit()?;
            Ok::<_, AppError>((s.wizard.clone(), totals, s.cart_id))
        })
        .await??;

    let delivery = wizard.delivery();
    let created = state
        .orders
        .create(NewOrder {
            restaurant_id: wizard.restaurant_id(),
            customer_name: delivery.name.trim().to_string(),
            items: wizard
                .lines()
                .iter()
                .map(|line| OrderLine {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
            total: totals.total,
            address: delivery.full_address(),
            payment: wizard.payment_method().label().to_string(),
            placed_at: Utc::now(),
        })
        .await;
    let order = match created {
        Ok(order) => order,
        Err(err) => {
            tracing::warn!(checkout_id = %id, error = %err, "order could not be recorded");
            state.checkouts.update(id, |s| s.wizard.reopen()).await?;
            return Err(err);
        }
    };

    if state.checkouts.remove(id).await.is_err() {
        tracing::debug!(checkout_id = %id, "checkout already closed");
    }

    log_audit(
        state,
        "order_placed",
        Some("orders"),
        Some(serde_json::json!({
            "order_id": order.id,
            "checkout_id": id,
            "cart_id": cart_id,
            "total": totals.total,
        })),
    )
    .await;

    let delay = state.config.order_submit_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let confirmation = confirmation_for(state, &order);
    Ok(ApiResponse::success(
        "Your order has been placed successfully!",
        OrderPlaced {
            order_id: order.id,
            redirect: format!("/order-success/{}", order.id),
            confirmation,
        },
        Some(Meta::empty()),
    ))
}
