use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{models::CartLine, pricing::CartTotals};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCartRequest {
    pub restaurant_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub menu_item_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustQuantityRequest {
    /// Signed change, e.g. `-1` or `1`.
    pub delta: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub id: Uuid,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub totals: CartTotals,
    pub min_order: i64,
    pub meets_min_order: bool,
}
