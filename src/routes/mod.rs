use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod checkout;
pub mod doc;
pub mod health;
pub mod orders;
pub mod owner;
pub mod params;
pub mod registrations;
pub mod restaurants;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/restaurants", restaurants::router())
        .nest("/carts", cart::router())
        .nest("/checkouts", checkout::router())
        .nest("/orders", orders::router())
        .nest("/registrations", registrations::router())
        .nest("/owner", owner::router())
}
