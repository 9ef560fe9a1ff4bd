use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    signup::RestaurantRegistration,
    store::{NewOrder, OrderStore, RegistrationStore, StoredRegistration},
};

struct OrderTable {
    next_id: i64,
    rows: BTreeMap<i64, Order>,
}

pub struct MemoryOrderStore {
    inner: RwLock<OrderTable>,
}

impl MemoryOrderStore {
    /// New ids continue after the highest seeded id.
    pub fn new(seed: Vec<Order>) -> Self {
        let next_id = seed.iter().map(|o| o.id).max().unwrap_or(1000) + 1;
        let rows = seed.into_iter().map(|o| (o.id, o)).collect();
        Self {
            inner: RwLock::new(OrderTable { next_id, rows }),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: NewOrder) -> AppResult<Order> {
        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let order = Order {
            id,
            restaurant_id: order.restaurant_id,
            customer_name: order.customer_name,
            items: order.items,
            total: order.total,
            status: OrderStatus::New,
            placed_at: order.placed_at,
            address: order.address,
            payment: order.payment,
        };
        table.rows.insert(id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: i64) -> AppResult<Order> {
        let table = self.inner.read().await;
        table.rows.get(&id).cloned().ok_or(AppError::NotFound)
    }

    async fn list(&self, restaurant_id: i64) -> AppResult<Vec<Order>> {
        let table = self.inner.read().await;
        Ok(table
            .rows
            .values()
            .filter(|o| o.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        let mut table = self.inner.write().await;
        let order = table.rows.get_mut(&id).ok_or(AppError::NotFound)?;
        order.status = order.status.transition(status)?;
        Ok(order.clone())
    }
}

#[derive(Default)]
pub struct MemoryRegistrationStore {
    rows: RwLock<HashMap<Uuid, StoredRegistration>>,
}

impl MemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationStore for MemoryRegistrationStore {
    async fn create(&self, registration: RestaurantRegistration) -> AppResult<StoredRegistration> {
        let stored = StoredRegistration {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            registration,
        };
        self.rows.write().await.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> AppResult<StoredRegistration> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound)
    }
}

/// Per-visitor state (carts, wizards) keyed by a random id. Closures run under
/// the write lock so each step is applied atomically.
pub struct SessionStore<T> {
    sessions: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> SessionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, value: T) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, value);
        id
    }

    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&T) -> R) -> AppResult<R> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(f).ok_or(AppError::NotFound)
    }

    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut T) -> R) -> AppResult<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f).ok_or(AppError::NotFound)
    }

    /// Removes and returns the entry once `check` accepts it. A rejected entry
    /// stays in place.
    pub async fn take_if<E>(
        &self,
        id: Uuid,
        check: impl FnOnce(&T) -> Result<(), E>,
    ) -> AppResult<Result<T, E>> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&id).map(check) {
            None => Err(AppError::NotFound),
            Some(Err(err)) => Ok(Err(err)),
            Some(Ok(())) => sessions.remove(&id).map(Ok).ok_or(AppError::NotFound),
        }
    }

    pub async fn remove(&self, id: Uuid) -> AppResult<T> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or(AppError::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
