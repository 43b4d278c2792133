use warp::http::header::LOCATION;
use warp::http::{Method, StatusCode};
use warp::reply::Response;
use warp::Reply;

use crate::bootstrap::AppServices;
use crate::web::ApiError;

/// `302 Found` to the editor of a freshly generated name.
pub(super) fn redirect(method: &Method, services: &AppServices) -> Result<Response, ApiError> {
    if !matches!(*method, Method::GET | Method::HEAD) {
        return Err(ApiError::UnsupportedMethod);
    }

    let name = services.generate_name().execute();
    let location = format!("/{}", urlencoding::encode(&name));

    Ok(warp::reply::with_header(
        warp::reply::with_status(warp::reply(), StatusCode::FOUND),
        LOCATION,
        location,
    )
    .into_response())
}
