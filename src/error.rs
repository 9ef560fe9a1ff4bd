use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    cart::CartError,
    checkout::WizardError as CheckoutError,
    models::TransitionError,
    response::{ApiResponse, Meta},
    signup::WizardError as SignupError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::IncompleteDelivery | CheckoutError::IncompleteCard => {
                AppError::BadRequest(err.to_string())
            }
            CheckoutError::InvalidTransition { .. } | CheckoutError::AlreadySubmitted => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

impl From<SignupError> for AppError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::IncompleteBasicInfo
            | SignupError::NoMenuItems
            | SignupError::InvalidPrice(_)
            | SignupError::UnknownCategory(_)
            | SignupError::EmptyCategory => AppError::BadRequest(err.to_string()),
            SignupError::MenuItemNotFound(_) => AppError::NotFound,
            SignupError::InvalidTransition { .. } | SignupError::AlreadySubmitted => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = self.to_string();

        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData { error: message }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
