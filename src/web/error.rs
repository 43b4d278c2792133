use std::convert::Infallible;

use thiserror::Error;
use tracing::{error, warn};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

/// Request-local failures. None of them touch clipboard state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("content type must be text/plain")]
    BadContentType,

    #[error("request body is not valid UTF-8")]
    MalformedBody,

    #[error("method not allowed")]
    UnsupportedMethod,

    #[error("not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadContentType | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl warp::reject::Reject for ApiError {}

impl Reply for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warp::reply::with_status(self.to_string(), status).into_response()
    }
}

/// Turn rejections into plain-text error responses.
pub async fn recover(err: Rejection) -> Result<Response, Infallible> {
    if let Some(api_error) = err.find::<ApiError>() {
        warn!(status = %api_error.status(), "request rejected: {}", api_error);
        return Ok(api_error.clone().into_response());
    }

    if err.is_not_found() {
        return Ok(ApiError::NotFound.into_response());
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(ApiError::UnsupportedMethod.into_response());
    }

    if err.find::<warp::reject::InvalidHeader>().is_some() {
        warn!("request rejected: unreadable content type header");
        return Ok(ApiError::BadContentType.into_response());
    }

    error!("unhandled rejection: {:?}", err);
    Ok(warp::reply::with_status("internal error", StatusCode::INTERNAL_SERVER_ERROR).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::BadContentType.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MalformedBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UnsupportedMethod.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn recover_maps_custom_rejection() {
        let response = recover(warp::reject::custom(ApiError::UnsupportedMethod))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn recover_maps_warp_not_found() {
        let response = recover(warp::reject::not_found()).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
