use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    checkout::CheckoutStep,
    dto::orders::OrderConfirmation,
    models::{CardInfo, CartLine, DeliveryInfo, PaymentMethod},
    pricing::OrderTotals,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct StartCheckoutRequest {
    pub cart_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub card: Option<CardInfo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutView {
    pub id: Uuid,
    pub step: CheckoutStep,
    pub step_number: u8,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub lines: Vec<CartLine>,
    pub delivery: DeliveryInfo,
    pub payment_method: PaymentMethod,
    /// Card details with the number and cvc masked.
    pub card: CardInfo,
    pub totals: OrderTotals,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPlaced {
    pub order_id: i64,
    pub confirmation: OrderConfirmation,
    /// Where the client navigates next.
    pub redirect: String,
}
