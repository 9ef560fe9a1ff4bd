use thiserror::Error;

use crate::{
    models::{CartLine, MenuItem},
    pricing::{self, CartTotals},
};

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("A cart line cannot hold more than {MAX_LINE_QUANTITY} of an item")]
    QuantityLimit,
}

/// Accumulates menu items for one restaurant. Lines are unique per item id and
/// never hold a zero quantity.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, item_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item_id == item_id)
            .map_or(0, |line| line.quantity)
    }

    /// Adds one unit of `item`, merging into an existing line.
    pub fn add(&mut self, item: &MenuItem) -> Result<&CartLine, CartError> {
        let idx = match self.lines.iter().position(|line| line.item_id == item.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                if line.quantity >= MAX_LINE_QUANTITY {
                    return Err(CartError::QuantityLimit);
                }
                line.quantity += 1;
                idx
            }
            None => {
                self.lines.push(CartLine {
                    item_id: item.id,
                    name: item.name.clone(),
                    price: item.price,
                    quantity: 1,
                });
                self.lines.len() - 1
            }
        };
        Ok(&self.lines[idx])
    }

    /// Shifts a line's quantity by `delta`, clamping at zero. A line that hits
    /// zero is dropped. Returns the new quantity; a change past
    /// [`MAX_LINE_QUANTITY`] is rejected and leaves the line as it was.
    pub fn adjust(&mut self, item_id: i64, delta: i32) -> Result<u32, CartError> {
        let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) else {
            return Ok(0);
        };
        let quantity = (i64::from(line.quantity) + i64::from(delta)).max(0);
        if quantity > i64::from(MAX_LINE_QUANTITY) {
            return Err(CartError::QuantityLimit);
        }
        line.quantity = quantity as u32;
        self.lines.retain(|line| line.quantity > 0);
        Ok(quantity as u32)
    }

    pub fn subtotal(&self) -> i64 {
        pricing::subtotal(&self.lines)
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::for_lines(&self.lines)
    }
}
