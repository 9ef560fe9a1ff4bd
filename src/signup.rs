//! Restaurant registration wizard: `BasicInfo -> MenuItems -> Review -> Submitted`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const DEFAULT_CATEGORIES: [&str; 3] = ["Main Dishes", "Sides", "Drinks"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignupStep {
    BasicInfo,
    MenuItems,
    Review,
    Submitted,
}

impl SignupStep {
    fn previous(self) -> Option<SignupStep> {
        match self {
            SignupStep::MenuItems => Some(SignupStep::BasicInfo),
            SignupStep::Review => Some(SignupStep::MenuItems),
            SignupStep::BasicInfo | SignupStep::Submitted => None,
        }
    }
}

impl fmt::Display for SignupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignupStep::BasicInfo => "basic info",
            SignupStep::MenuItems => "menu items",
            SignupStep::Review => "review",
            SignupStep::Submitted => "submitted",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please fill out all required restaurant information")]
    IncompleteBasicInfo,

    #[error("Add at least one menu item")]
    NoMenuItems,

    #[error("Price must be a number, got {0:?}")]
    InvalidPrice(String),

    #[error("Unknown category {0:?}")]
    UnknownCategory(String),

    #[error("Category name must not be empty")]
    EmptyCategory,

    #[error("Menu item {0} not found")]
    MenuItemNotFound(i64),

    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        from: SignupStep,
        action: &'static str,
    },

    #[error("Registration has already been submitted")]
    AlreadySubmitted,
}

/// Basic restaurant details. `logo` and `banner` are image references.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RestaurantProfile {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub cuisine: String,
    pub logo: String,
    pub banner: String,
}

impl RestaurantProfile {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("address", &self.address),
            ("phone", &self.phone),
            ("email", &self.email),
            ("cuisine", &self.cuisine),
            ("logo", &self.logo),
            ("banner", &self.banner),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDraft {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price as typed, e.g. "8.99".
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}

/// Partial update of a menu item draft; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Everything collected by a finished registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantRegistration {
    pub profile: RestaurantProfile,
    pub categories: Vec<String>,
    pub menu_items: Vec<MenuItemDraft>,
}

/// Accepts digits with at most one decimal point; the empty string is allowed
/// so a field can be cleared.
pub fn is_price_text(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().filter(|&c| c == '.').count() <= 1
}

#[derive(Debug, Clone)]
pub struct SignupWizard {
    step: SignupStep,
    profile: RestaurantProfile,
    categories: Vec<String>,
    menu_items: Vec<MenuItemDraft>,
    next_item_id: i64,
}

impl Default for SignupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupWizard {
    pub fn new() -> Self {
        Self {
            step: SignupStep::BasicInfo,
            profile: RestaurantProfile::default(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            menu_items: Vec::new(),
            next_item_id: 1,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn profile(&self) -> &RestaurantProfile {
        &self.profile
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn menu_items(&self) -> &[MenuItemDraft] {
        &self.menu_items
    }

    pub fn set_profile(&mut self, profile: RestaurantProfile) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.profile = profile;
        Ok(())
    }

    /// Inserts a category unless an identical one exists. Returns whether the
    /// list grew.
    pub fn add_category(&mut self, name: &str) -> Result<bool, WizardError> {
        self.ensure_open()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::EmptyCategory);
        }
        if self.categories.iter().any(|c| c == name) {
            return Ok(false);
        }
        self.categories.push(name.to_string());
        Ok(true)
    }

    /// Appends a blank item in the first category.
    pub fn add_menu_item(&mut self) -> Result<&MenuItemDraft, WizardError> {
        self.ensure_open()?;
        let item = MenuItemDraft {
            id: self.next_item_id,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: self.categories.first().cloned().unwrap_or_default(),
            image: None,
        };
        self.next_item_id += 1;
        self.menu_items.push(item);
        Ok(&self.menu_items[self.menu_items.len() - 1])
    }

    pub fn update_menu_item(
        &mut self,
        id: i64,
        patch: MenuItemPatch,
    ) -> Result<&MenuItemDraft, WizardError> {
        self.ensure_open()?;
        if let Some(price) = &patch.price {
            if !is_price_text(price) {
                return Err(WizardError::InvalidPrice(price.clone()));
            }
        }
        if let Some(category) = &patch.category {
            if !self.categories.contains(category) {
                return Err(WizardError::UnknownCategory(category.clone()));
            }
        }
        let item = self
            .menu_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(WizardError::MenuItemNotFound(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(image) = patch.image {
            item.image = Some(image).filter(|i| !i.is_empty());
        }
        Ok(item)
    }

    pub fn remove_menu_item(&mut self, id: i64) -> Result<(), WizardError> {
        self.ensure_open()?;
        let before = self.menu_items.len();
        self.menu_items.retain(|item| item.id != id);
        if self.menu_items.len() == before {
            return Err(WizardError::MenuItemNotFound(id));
        }
        Ok(())
    }

    pub fn advance(&mut self) -> Result<SignupStep, WizardError> {
        let next = match self.step {
            SignupStep::BasicInfo => {
                if !self.profile.missing_fields().is_empty() {
                    return Err(WizardError::IncompleteBasicInfo);
                }
                SignupStep::MenuItems
            }
            SignupStep::MenuItems => {
                if self.menu_items.is_empty() {
                    return Err(WizardError::NoMenuItems);
                }
                SignupStep::Review
            }
            SignupStep::Review => {
                return Err(WizardError::InvalidTransition {
                    from: self.step,
                    action: "advance",
                });
            }
            SignupStep::Submitted => return Err(WizardError::AlreadySubmitted),
        };
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<SignupStep, WizardError> {
        self.ensure_open()?;
        let previous = self.step.previous().ok_or(WizardError::InvalidTransition {
            from: self.step,
            action: "go back",
        })?;
        self.step = previous;
        Ok(previous)
    }

    pub fn submit(&mut self) -> Result<RestaurantRegistration, WizardError> {
        match self.step {
            SignupStep::Review => {
                self.step = SignupStep::Submitted;
                Ok(RestaurantRegistration {
                    profile: self.profile.clone(),
                    categories: self.categories.clone(),
                    menu_items: self.menu_items.clone(),
                })
            }
            SignupStep::Submitted => Err(WizardError::AlreadySubmitted),
            from => Err(WizardError::InvalidTransition {
                from,
                action: "submit",
            }),
        }
    }

    pub fn reopen(&mut self) {
        if self.step == SignupStep::Submitted {
            self.step = SignupStep::Review;
        }
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.step == SignupStep::Submitted {
            Err(WizardError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }
}
