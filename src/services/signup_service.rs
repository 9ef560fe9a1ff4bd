use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::signup::{AddCategoryRequest, RegistrationSubmitted, SignupView},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    signup::{MenuItemDraft, MenuItemPatch, RestaurantProfile, SignupWizard},
    state::AppState,
};

fn signup_view(id: Uuid, wizard: &SignupWizard) -> SignupView {
    SignupView {
        id,
        step: wizard.step(),
        profile: wizard.profile().clone(),
        categories: wizard.categories().to_vec(),
        menu_items: wizard.menu_items().to_vec(),
    }
}

pub async fn start_registration(state: &AppState) -> AppResult<ApiResponse<SignupView>> {
    let wizard = SignupWizard::new();
    let view_wizard = wizard.clone();
    let id = state.signups.insert(wizard).await;
    tracing::debug!(registration_id = %id, "registration started");

    Ok(ApiResponse::success(
        "Registration started",
        signup_view(id, &view_wizard),
        Some(Meta::empty()),
    ))
}

pub async fn get_registration(state: &AppState, id: Uuid) -> AppResult<ApiResponse<SignupView>> {
    let view = state.signups.read(id, |w| signup_view(id, w)).await?;
    Ok(ApiResponse::success("OK", view, None))
}

pub async fn update_basic_info(
    state: &AppState,
    id: Uuid,
    payload: RestaurantProfile,
) -> AppResult<ApiResponse<SignupView>> {
    let view = state
        .signups
        .update(id, |w| {
            w.set_profile(payload)?;
            Ok::<_, AppError>(signup_view(id, w))
        })
        .await??;
    Ok(ApiResponse::success("Restaurant information saved", view, None))
}

pub async fn add_category(
    state: &AppState,
    id: Uuid,
    payload: AddCategoryRequest,
) -> AppResult<ApiResponse<SignupView>> {
    let (added, view) = state
        .signups
        .update(id, |w| {
            let added = w.add_category(&payload.name)?;
            Ok::<_, AppError>((added, signup_view(id, w)))
        })
        .await??;

    let message = if added {
        "Category added"
    } else {
        "Category already exists"
    };
    Ok(ApiResponse::success(message, view, None))
}

pub async fn add_menu_item(state: &AppState, id: Uuid) -> AppResult<ApiResponse<MenuItemDraft>> {
    let item = state
        .signups
        .update(id, |w| w.add_menu_item().cloned())
        .await??;
    Ok(ApiResponse::success("Menu item added", item, None))
}

pub async fn update_menu_item(
    state: &AppState,
    id: Uuid,
    item_id: i64,
    payload: MenuItemPatch,
) -> AppResult<ApiResponse<MenuItemDraft>> {
    let item = state
        .signups
        .update(id, |w| w.update_menu_item(item_id, payload).cloned())
        .await??;
    Ok(ApiResponse::success("Menu item updated", item, None))
}

pub async fn remove_menu_item(
    state: &AppState,
    id: Uuid,
    item_id: i64,
) -> AppResult<ApiResponse<SignupView>> {
    let view = state
        .signups
        .update(id, |w| {
            w.remove_menu_item(item_id)?;
            Ok::<_, AppError>(signup_view(id, w))
        })
        .await??;
    Ok(ApiResponse::success("Menu item removed", view, None))
}

pub async fn next_step(state: &AppState, id: Uuid) -> AppResult<ApiResponse<SignupView>> {
    let view = state
        .signups
        .update(id, |w| {
            w.advance()?;
            Ok::<_, AppError>(signup_view(id, w))
        })
        .await?
        .inspect_err(|err| tracing::warn!(registration_id = %id, error = %err, "registration step rejected"))?;

    Ok(ApiResponse::success(
        format!("Moved to {} step", view.step),
        view,
        None,
    ))
}

pub async fn previous_step(state: &AppState, id: Uuid) -> AppResult<ApiResponse<SignupView>> {
    let view = state
        .signups
        .update(id, |w| {
            w.back()?;
            Ok::<_, AppError>(signup_view(id, w))
        })
        .await??;

    Ok(ApiResponse::success(
        format!("Moved to {} step", view.step),
        view,
        None,
    ))
}

/// Records the registration, waits the configured delay, and points the
/// client at the owner dashboard. The signup session ends once recorded.
pub async fn submit_registration(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<RegistrationSubmitted>> {
    let registration = state
        .signups
        .update(id, |w| w.submit())
        .await??;

    tracing::info!(
        registration_id = %id,
        restaurant = ?registration.profile,
        menu_items = ?registration.menu_items,
        "restaurant registration submitted"
    );
    let stored = match state.registrations.create(registration).await {
        Ok(stored) => stored,
        Err(err) => {
            tracing::warn!(registration_id = %id, error = %err, "registration could not be recorded");
            state.signups.update(id, |w| w.reopen()).await?;
            return Err(err);
        }
    };
    if state.signups.remove(id).await.is_err() {
        tracing::debug!(registration_id = %id, "registration already closed");
    }

    log_audit(
        state,
        "restaurant_registered",
        Some("registrations"),
        Some(serde_json::json!({
            "registration_id": stored.id,
            "name": stored.registration.profile.name,
            "menu_items": stored.registration.menu_items.len(),
        })),
    )
    .await;

    let delay = state.config.registration_submit_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Ok(ApiResponse::success(
        "Restaurant registration successful! We'll review your information and get back to you soon.",
        RegistrationSubmitted {
            registration_id: stored.id,
            registration: stored.registration,
            redirect: "/owner-dashboard".to_string(),
        },
        Some(Meta::empty()),
    ))
}
