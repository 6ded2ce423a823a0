// JSON request bodies, with or without a Content-Length header

use bytes::Buf;
use futures_util::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use warp::{Filter, Rejection};

use super::rejection::ApiError;

/// Largest JSON body accepted by the create routes
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Deserialize the request body as JSON.
///
/// The body is read as a stream so chunked uploads work; the size cap is
/// enforced while reading.
pub fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: DeserializeOwned + Send + 'static,
{
    warp::body::stream().and_then(|body| async move {
        let bytes = read_body(body, MAX_BODY_BYTES).await?;
        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| warp::reject::custom(ApiError::InvalidBody(e.to_string())))
    })
}

/// Collect a body stream, failing once more than `limit` bytes arrive
pub(crate) async fn read_body<S, B, E>(body: S, limit: usize) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
    E: std::fmt::Display,
{
    let mut body = Box::pin(body);
    let mut bytes = Vec::new();

    while let Some(chunk) = body.next().await {
        let mut chunk =
            chunk.map_err(|e| warp::reject::custom(ApiError::InvalidBody(e.to_string())))?;
        if bytes.len() + chunk.remaining() > limit {
            return Err(warp::reject::custom(ApiError::BodyTooLarge(limit)));
        }
        while chunk.has_remaining() {
            let part = chunk.chunk();
            let len = part.len();
            bytes.extend_from_slice(part);
            chunk.advance(len);
        }
    }

    Ok(bytes)
}
