use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::catalog::{CuisineList, MenuSection, RestaurantList},
    error::AppResult,
    models::Restaurant,
    response::ApiResponse,
    routes::params::{MenuQuery, RestaurantQuery},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants))
        .route("/featured", get(featured_restaurants))
        .route("/cuisines", get(list_cuisines))
        .route("/{id}", get(get_restaurant))
        .route("/{id}/menu", get(get_menu))
}

#[utoipa::path(
    get,
    path = "/api/restaurants",
    params(RestaurantQuery),
    responses(
        (status = 200, description = "Restaurants matching the search text and cuisine", body = ApiResponse<RestaurantList>)
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> AppResult<Json<ApiResponse<RestaurantList>>> {
    let resp = catalog_service::list_restaurants(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/featured",
    responses(
        (status = 200, description = "Featured restaurants for the home page", body = ApiResponse<RestaurantList>)
    ),
    tag = "Restaurants"
)]
pub async fn featured_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RestaurantList>>> {
    let resp = catalog_service::featured_restaurants(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/cuisines",
    responses(
        (status = 200, description = "Cuisine filter options, starting with All", body = ApiResponse<CuisineList>)
    ),
    tag = "Restaurants"
)]
pub async fn list_cuisines(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CuisineList>>> {
    let resp = catalog_service::cuisines(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant with its menu", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    let resp = catalog_service::get_restaurant(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/menu",
    params(
        ("id" = i64, Path, description = "Restaurant ID"),
        MenuQuery
    ),
    responses(
        (status = 200, description = "Menu items of one category", body = ApiResponse<MenuSection>),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<ApiResponse<MenuSection>>> {
    let resp = catalog_service::menu_section(&state, id, query).await?;
    Ok(Json(resp))
}
