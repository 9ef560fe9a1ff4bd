//! Storage seams. Everything is held in process memory; the traits mark where a
//! real backend would plug in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Order, OrderLine, OrderStatus},
    signup::RestaurantRegistration,
};

pub mod catalog;
pub mod memory;

pub use catalog::Catalog;
pub use memory::{MemoryOrderStore, MemoryRegistrationStore, SessionStore};

/// Order data supplied by checkout; the store assigns id and status.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub restaurant_id: i64,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub total: i64,
    pub address: String,
    pub payment: String,
    pub placed_at: DateTime<Utc>,
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> AppResult<Order>;

    async fn get(&self, id: i64) -> AppResult<Order>;

    /// Orders of one restaurant, oldest first.
    async fn list(&self, restaurant_id: i64) -> AppResult<Vec<Order>>;

    /// Applies one step of the status table.
    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order>;
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoredRegistration {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub registration: RestaurantRegistration,
}

#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn create(&self, registration: RestaurantRegistration) -> AppResult<StoredRegistration>;

    async fn get(&self, id: Uuid) -> AppResult<StoredRegistration>;
}
