use crate::{
    dto::catalog::{CuisineList, MenuSection, RestaurantList},
    error::{AppError, AppResult},
    models::{Restaurant, RestaurantSummary},
    response::{ApiResponse, Meta},
    routes::params::{MenuQuery, RestaurantQuery},
    state::AppState,
};

pub async fn list_restaurants(
    state: &AppState,
    query: RestaurantQuery,
) -> AppResult<ApiResponse<RestaurantList>> {
    let matches: Vec<RestaurantSummary> = state
        .catalog
        .search(query.q.as_deref(), query.cuisine.as_deref())
        .map(RestaurantSummary::from)
        .collect();
    let total = matches.len() as i64;
    let (items, page, per_page) = query.pagination().apply(matches);

    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success(
        "Restaurants",
        RestaurantList { items },
        Some(meta),
    ))
}

pub async fn featured_restaurants(state: &AppState) -> AppResult<ApiResponse<RestaurantList>> {
    let items: Vec<RestaurantSummary> = state
        .catalog
        .featured()
        .map(RestaurantSummary::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Featured restaurants",
        RestaurantList { items },
        Some(meta),
    ))
}

pub async fn cuisines(state: &AppState) -> AppResult<ApiResponse<CuisineList>> {
    let items = state.catalog.cuisines();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Cuisines", CuisineList { items }, Some(meta)))
}

pub async fn get_restaurant(state: &AppState, id: i64) -> AppResult<ApiResponse<Restaurant>> {
    let restaurant = state.catalog.find(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Restaurant", restaurant.clone(), None))
}

pub async fn menu_section(
    state: &AppState,
    id: i64,
    query: MenuQuery,
) -> AppResult<ApiResponse<MenuSection>> {
    let restaurant = state.catalog.find(id).ok_or(AppError::NotFound)?;
    let category = query
        .category
        .filter(|c| !c.is_empty())
        .or_else(|| restaurant.categories.first().cloned())
        .unwrap_or_default();
    let items = restaurant.items_in_category(&category).cloned().collect();

    Ok(ApiResponse::success(
        "Menu",
        MenuSection {
            categories: restaurant.categories.clone(),
            category,
            items,
        },
        Some(Meta::empty()),
    ))
}
