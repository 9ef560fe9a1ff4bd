use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    audit::AuditEntry,
    models::{Order, OrderAction, OrderLine, OrderStatus, relative_time},
    seed::OwnerProfile,
};

/// The order-success view.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub eta: String,
    pub restaurant_name: String,
    pub items: Vec<OrderLine>,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub tax: i64,
    pub total: i64,
    pub address: String,
    pub status: OrderStatus,
}

/// An order as the owner dashboard lists it.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderView {
    pub id: i64,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub total: i64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub time: String,
    pub address: String,
    pub payment: String,
    pub actions: Vec<OrderAction>,
}

impl OrderView {
    pub fn new(order: Order, now: DateTime<Utc>) -> Self {
        Self {
            id: order.id,
            time: relative_time(order.placed_at, now),
            actions: order.status.actions(),
            customer_name: order.customer_name,
            items: order.items,
            total: order.total,
            status: order.status,
            placed_at: order.placed_at,
            address: order.address,
            payment: order.payment,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<OrderView>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerSummary {
    pub restaurant: OwnerProfile,
    pub new_orders: usize,
    pub preparing_orders: usize,
    pub ready_orders: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ActivityList {
    #[schema(value_type = Vec<AuditEntry>)]
    pub items: Vec<AuditEntry>,
}
