//! Checkout wizard: `Delivery -> Payment -> Review -> Submitted`.
//!
//! Forward moves are gated on the form data of the step being left. Backward
//! moves are always allowed from Payment and Review and keep every field.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::{
    models::{CardInfo, CartLine, DeliveryInfo, PaymentMethod},
    pricing::OrderTotals,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Delivery,
    Payment,
    Review,
    Submitted,
}

impl CheckoutStep {
    pub fn number(self) -> u8 {
        match self {
            CheckoutStep::Delivery => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
            CheckoutStep::Submitted => 4,
        }
    }

    fn previous(self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Payment => Some(CheckoutStep::Delivery),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
            CheckoutStep::Delivery | CheckoutStep::Submitted => None,
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckoutStep::Delivery => "delivery",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Submitted => "submitted",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please fill out all required fields")]
    IncompleteDelivery,

    #[error("Please fill out all card information")]
    IncompleteCard,

    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        from: CheckoutStep,
        action: &'static str,
    },

    #[error("Order has already been submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    restaurant_id: i64,
    lines: Vec<CartLine>,
    delivery: DeliveryInfo,
    payment_method: PaymentMethod,
    card: CardInfo,
}

impl CheckoutWizard {
    pub fn new(restaurant_id: i64, lines: Vec<CartLine>) -> Self {
        Self {
            step: CheckoutStep::Delivery,
            restaurant_id,
            lines,
            delivery: DeliveryInfo::default(),
            payment_method: PaymentMethod::default(),
            card: CardInfo::default(),
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn delivery(&self) -> &DeliveryInfo {
        &self.delivery
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn card(&self) -> &CardInfo {
        &self.card
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals::for_lines(&self.lines)
    }

    pub fn set_delivery(&mut self, delivery: DeliveryInfo) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.delivery = delivery;
        Ok(())
    }

    /// Replaces the payment choice. Card details are kept when `card` is
    /// `None` so switching methods back and forth does not lose them.
    pub fn set_payment(
        &mut self,
        method: PaymentMethod,
        card: Option<CardInfo>,
    ) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.payment_method = method;
        if let Some(card) = card {
            self.card = card;
        }
        Ok(())
    }

    /// Moves one step forward, validating the step being left.
    pub fn advance(&mut self) -> Result<CheckoutStep, WizardError> {
        let next = match self.step {
            CheckoutStep::Delivery => {
                if !self.delivery.missing_fields().is_empty() {
                    return Err(WizardError::IncompleteDelivery);
                }
                CheckoutStep::Payment
            }
            CheckoutStep::Payment => {
                if self.payment_method.requires_card() && !self.card.is_complete() {
                    return Err(WizardError::IncompleteCard);
                }
                CheckoutStep::Review
            }
            CheckoutStep::Review => {
                return Err(WizardError::InvalidTransition {
                    from: self.step,
                    action: "advance",
                });
            }
            CheckoutStep::Submitted => return Err(WizardError::AlreadySubmitted),
        };
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<CheckoutStep, WizardError> {
        self.ensure_open()?;
        let previous = self.step.previous().ok_or(WizardError::InvalidTransition {
            from: self.step,
            action: "go back",
        })?;
        self.step = previous;
        Ok(previous)
    }

    /// Places the order from the Review step.
    pub fn submit(&mut self) -> Result<OrderTotals, WizardError> {
        match self.step {
            CheckoutStep::Review => {
                self.step = CheckoutStep::Submitted;
                Ok(self.totals())
            }
            CheckoutStep::Submitted => Err(WizardError::AlreadySubmitted),
            from => Err(WizardError::InvalidTransition {
                from,
                action: "submit",
            }),
        }
    }

    /// Returns a submitted checkout to Review when the order could not be
    /// recorded.
    pub fn reopen(&mut self) {
        if self.step == CheckoutStep::Submitted {
            self.step = CheckoutStep::Review;
        }
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.step == CheckoutStep::Submitted {
            Err(WizardError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }
}
