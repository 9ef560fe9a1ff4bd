use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::signup::{MenuItemDraft, RestaurantProfile, RestaurantRegistration, SignupStep};

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupView {
    pub id: Uuid,
    pub step: SignupStep,
    pub profile: RestaurantProfile,
    pub categories: Vec<String>,
    pub menu_items: Vec<MenuItemDraft>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationSubmitted {
    pub registration_id: Uuid,
    pub registration: RestaurantRegistration,
    pub redirect: String,
}
