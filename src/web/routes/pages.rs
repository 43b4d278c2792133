use warp::http::Method;
use warp::reply::Response;
use warp::Reply;

use crate::web::ApiError;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const EDITOR_HTML: &str = include_str!("../assets/editor.html");

pub(super) fn index(method: &Method) -> Result<Response, ApiError> {
    page(method, INDEX_HTML)
}

/// The editor finds its clipboard name in `location.pathname`, so one static
/// page serves every name.
pub(super) fn editor(method: &Method) -> Result<Response, ApiError> {
    page(method, EDITOR_HTML)
}

fn page(method: &Method, html: &'static str) -> Result<Response, ApiError> {
    match *method {
        Method::GET | Method::HEAD => Ok(warp::reply::html(html).into_response()),
        _ => Err(ApiError::UnsupportedMethod),
    }
}
