// GET / handler

use std::convert::Infallible;

use crate::models::StatusResponse;

/// Liveness check; never touches the store.
pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&StatusResponse {
        message: "I'm live".to_string(),
    }))
}
