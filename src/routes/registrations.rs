use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post, put},
};
use uuid::Uuid;

use crate::{
    dto::signup::{AddCategoryRequest, RegistrationSubmitted, SignupView},
    error::AppResult,
    response::ApiResponse,
    services::signup_service,
    signup::{MenuItemDraft, MenuItemPatch, RestaurantProfile},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_registration))
        .route("/{id}", get(get_registration))
        .route("/{id}/basic-info", put(update_basic_info))
        .route("/{id}/categories", post(add_category))
        .route("/{id}/menu-items", post(add_menu_item))
        .route(
            "/{id}/menu-items/{item_id}",
            patch(update_menu_item).delete(remove_menu_item),
        )
        .route("/{id}/next", post(next_step))
        .route("/{id}/back", post(previous_step))
        .route("/{id}/submit", post(submit_registration))
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    responses(
        (status = 200, description = "Open a registration at the basic info step", body = ApiResponse<SignupView>)
    ),
    tag = "Registration"
)]
pub async fn start_registration(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::start_registration(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Current step and collected data", body = ApiResponse<SignupView>),
        (status = 404, description = "Registration not found"),
    ),
    tag = "Registration"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::get_registration(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/registrations/{id}/basic-info",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = RestaurantProfile,
    responses(
        (status = 200, description = "Restaurant information saved", body = ApiResponse<SignupView>),
        (status = 409, description = "Registration already submitted"),
    ),
    tag = "Registration"
)]
pub async fn update_basic_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RestaurantProfile>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::update_basic_info(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/categories",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = AddCategoryRequest,
    responses(
        (status = 200, description = "Category added, or already present", body = ApiResponse<SignupView>),
        (status = 400, description = "Empty category name"),
    ),
    tag = "Registration"
)]
pub async fn add_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddCategoryRequest>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::add_category(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/menu-items",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Blank menu item appended", body = ApiResponse<MenuItemDraft>),
        (status = 404, description = "Registration not found"),
    ),
    tag = "Registration"
)]
pub async fn add_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<MenuItemDraft>>> {
    let resp = signup_service::add_menu_item(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/registrations/{id}/menu-items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Registration ID"),
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    request_body = MenuItemPatch,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemDraft>),
        (status = 400, description = "Invalid price or unknown category"),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Registration"
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, i64)>,
    Json(payload): Json<MenuItemPatch>,
) -> AppResult<Json<ApiResponse<MenuItemDraft>>> {
    let resp = signup_service::update_menu_item(&state, id, item_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}/menu-items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Registration ID"),
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item removed", body = ApiResponse<SignupView>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Registration"
)]
pub async fn remove_menu_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, i64)>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::remove_menu_item(&state, id, item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/next",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Advanced one step", body = ApiResponse<SignupView>),
        (status = 400, description = "Step requirements not met"),
        (status = 409, description = "No forward step from here"),
    ),
    tag = "Registration"
)]
pub async fn next_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::next_step(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/back",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Went back one step", body = ApiResponse<SignupView>),
        (status = 409, description = "No previous step"),
    ),
    tag = "Registration"
)]
pub async fn previous_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SignupView>>> {
    let resp = signup_service::previous_step(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Registration recorded", body = ApiResponse<RegistrationSubmitted>),
        (status = 404, description = "Registration not found or already recorded"),
        (status = 409, description = "Not at the review step, or a submit is in flight"),
        (status = 500, description = "Registration could not be recorded; the wizard stays at review"),
    ),
    tag = "Registration"
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<RegistrationSubmitted>>> {
    let resp = signup_service::submit_registration(&state, id).await?;
    Ok(Json(resp))
}
