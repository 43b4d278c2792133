use bytes::Bytes;
use clips_core::ClipboardName;
use warp::http::header::CONTENT_TYPE;
use warp::http::Method;
use warp::reply::Response;
use warp::Reply;

use crate::bootstrap::AppServices;
use crate::web::ApiError;

const TEXT_PLAIN: &str = "text/plain";

/// `GET` reads, `POST` writes; nothing else is allowed.
pub(super) fn handle(
    method: &Method,
    name: &ClipboardName,
    content_type: Option<&str>,
    body: Bytes,
    services: &AppServices,
) -> Result<Response, ApiError> {
    match *method {
        Method::GET => {
            let text = services.read_text().execute(name);
            Ok(warp::reply::with_header(text, CONTENT_TYPE, "text/plain; charset=utf-8")
                .into_response())
        }
        Method::POST => {
            if !is_text_plain(content_type) {
                return Err(ApiError::BadContentType);
            }
            let text = String::from_utf8(body.to_vec()).map_err(|_| ApiError::MalformedBody)?;
            services.write_text().execute(name, text);
            Ok(warp::reply().into_response())
        }
        _ => Err(ApiError::UnsupportedMethod),
    }
}

/// `text/plain`, optionally followed by parameters such as `charset`.
fn is_text_plain(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(TEXT_PLAIN))
}
