use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{MenuItem, RestaurantSummary};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RestaurantList {
    #[schema(value_type = Vec<RestaurantSummary>)]
    pub items: Vec<RestaurantSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CuisineList {
    #[schema(value_type = Vec<String>)]
    pub items: Vec<String>,
}

/// One menu tab: the items of a single category.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuSection {
    pub category: String,
    pub categories: Vec<String>,
    pub items: Vec<MenuItem>,
}
