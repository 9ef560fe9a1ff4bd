use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::AuditLog,
    cart::Cart,
    checkout::CheckoutWizard,
    config::AppConfig,
    seed,
    signup::SignupWizard,
    store::{
        Catalog, MemoryOrderStore, MemoryRegistrationStore, OrderStore, RegistrationStore,
        SessionStore,
    },
};

/// A checkout opened from a cart. Opening it consumes the cart session, and
/// the checkout itself is dropped once its order is placed.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub cart_id: Uuid,
    pub wizard: CheckoutWizard,
}

/// A cart bound to the restaurant it was opened for.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub restaurant_id: i64,
    pub cart: Cart,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub carts: Arc<SessionStore<CartSession>>,
    pub checkouts: Arc<SessionStore<CheckoutSession>>,
    pub signups: Arc<SessionStore<SignupWizard>>,
    pub orders: Arc<dyn OrderStore>,
    pub registrations: Arc<dyn RegistrationStore>,
    pub audit: Arc<AuditLog>,
}

impl AppState {
    /// Fresh state seeded with the mock catalog and dashboard orders.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(Catalog::new(seed::restaurants())),
            carts: Arc::new(SessionStore::new()),
            checkouts: Arc::new(SessionStore::new()),
            signups: Arc::new(SessionStore::new()),
            orders: Arc::new(MemoryOrderStore::new(seed::orders(Utc::now()))),
            registrations: Arc::new(MemoryRegistrationStore::new()),
            audit: Arc::new(AuditLog::new()),
        }
    }
}
