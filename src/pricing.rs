//! Order money math. All amounts are integer cents.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::CartLine;

/// Flat delivery fee, $2.99.
pub const DELIVERY_FEE: i64 = 299;

/// Sales tax in percent, applied to the subtotal.
pub const TAX_RATE_PERCENT: i64 = 8;

pub fn subtotal(lines: &[CartLine]) -> i64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Tax on `subtotal`, rounded half-up to the cent.
pub fn tax(subtotal: i64) -> i64 {
    (subtotal * TAX_RATE_PERCENT + 50) / 100
}

/// Totals shown next to the cart: no tax yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartTotals {
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
}

impl CartTotals {
    pub fn for_lines(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            total: subtotal + DELIVERY_FEE,
        }
    }
}

/// Totals charged at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderTotals {
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub tax: i64,
    pub total: i64,
}

impl OrderTotals {
    pub fn for_lines(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);
        let tax = tax(subtotal);
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            tax,
            total: subtotal + DELIVERY_FEE + tax,
        }
    }
}
