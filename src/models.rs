use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in cents.
    pub price: i64,
    pub category: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
    /// Minimum order amount in cents.
    pub min_order: i64,
    pub description: String,
    pub image: String,
    pub featured: bool,
    pub categories: Vec<String>,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn menu_item(&self, id: i64) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    pub fn items_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.menu.iter().filter(move |item| item.category == category)
    }
}

/// Listing card for a restaurant, without its menu.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
    pub min_order: i64,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            image: r.image.clone(),
            cuisine: r.cuisine.clone(),
            rating: r.rating,
            delivery_time: r.delivery_time.clone(),
            min_order: r.min_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub item_id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeliveryInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    #[serde(default)]
    pub instructions: String,
}

impl DeliveryInfo {
    /// Names of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("zip_code", &self.zip_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn full_address(&self) -> String {
        format!("{}, {} {}", self.address.trim(), self.city.trim(), self.zip_code.trim())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CardInfo {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvc: String,
}

impl CardInfo {
    pub fn is_complete(&self) -> bool {
        [&self.number, &self.name, &self.expiry, &self.cvc]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Card details with everything but the last four digits masked.
    pub fn redacted(&self) -> Self {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        Self {
            number: if tail.is_empty() { String::new() } else { format!("**** {tail}") },
            name: self.name.clone(),
            expiry: self.expiry.clone(),
            cvc: if self.cvc.is_empty() { String::new() } else { "***".to_string() },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
    GooglePay,
    ApplePay,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::GooglePay => "Google Pay",
            PaymentMethod::ApplePay => "Apple Pay",
        }
    }

    pub fn requires_card(self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Delivered,
    Completed,
    Cancelled,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Order cannot move from {from} to {to}")]
    NotAllowed { from: OrderStatus, to: OrderStatus },
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Next status on the forward chain, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn can_cancel(self) -> bool {
        !self.is_terminal()
    }

    /// Statuses reachable in one step.
    pub fn transitions(self) -> Vec<OrderStatus> {
        let mut targets: Vec<OrderStatus> = self.next().into_iter().collect();
        if self.can_cancel() {
            targets.push(OrderStatus::Cancelled);
        }
        targets
    }

    pub fn transition(self, to: OrderStatus) -> Result<OrderStatus, TransitionError> {
        if self.transitions().contains(&to) {
            Ok(to)
        } else {
            Err(TransitionError::NotAllowed { from: self, to })
        }
    }

    pub fn actions(self) -> Vec<OrderAction> {
        let mut actions = Vec::new();
        if let Some(next) = self.next() {
            actions.push(OrderAction {
                label: format!("Mark as {next}"),
                status: next,
            });
        }
        if self.can_cancel() {
            actions.push(OrderAction {
                label: "Cancel".to_string(),
                status: OrderStatus::Cancelled,
            });
        }
        actions
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid order status: {s}"))
    }
}

/// A status change the dashboard offers for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderAction {
    pub label: String,
    pub status: OrderStatus,
}

/// Dashboard filter; `All` keeps every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub restaurant_id: i64,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub total: i64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub address: String,
    pub payment: String,
}

impl Order {
    pub fn order_number(&self) -> String {
        format!("ORD-{}", self.id)
    }
}

/// Renders the age of a timestamp the way the dashboard lists it.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes().max(0);
    fn unit(n: i64, name: &str) -> String {
        if n == 1 {
            format!("1 {name} ago")
        } else {
            format!("{n} {name}s ago")
        }
    }
    match minutes {
        0 => "just now".to_string(),
        1..=59 => unit(minutes, "minute"),
        60..=1439 => unit(minutes / 60, "hour"),
        _ => unit(minutes / 1440, "day"),
    }
}
