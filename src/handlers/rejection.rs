// Rejection recovery: every failure leaves as a JSON body

use std::convert::Infallible;

use tracing::{error, warn};
use warp::http::StatusCode;
use warp::Rejection;

use crate::models::ErrorResponse;
use crate::store::StoreError;

/// Failures raised by request handlers
#[derive(Debug)]
pub enum ApiError {
    /// A `:groupId` path segment that is not an integer
    InvalidGroupId(String),
    /// A request body that is not the expected JSON
    InvalidBody(String),
    /// A request body over the size cap, in bytes
    BodyTooLarge(usize),
    /// The store call failed
    Store(StoreError),
}

impl warp::reject::Reject for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

/// Turn a store failure into a rejection
pub(crate) fn store_rejection(err: StoreError) -> Rejection {
    warp::reject::custom(ApiError::from(err))
}

pub async fn handle_rejection(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::InvalidGroupId(raw) => {
                (StatusCode::BAD_REQUEST, format!("invalid groupId: {}", raw))
            }
            ApiError::InvalidBody(reason) => (
                StatusCode::BAD_REQUEST,
                format!("invalid request body: {}", reason),
            ),
            ApiError::BodyTooLarge(limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("request body exceeds {} bytes", limit),
            ),
            ApiError::Store(StoreError::GroupNotFound(id)) => {
                warn!("rejected message for missing group {}", id);
                (StatusCode::NOT_FOUND, format!("group {} does not exist", id))
            }
            ApiError::Store(store_error) => {
                error!("store failure: {}", store_error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        }
    } else if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else {
        error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse { error: message }),
        status,
    ))
}
