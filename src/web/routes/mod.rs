//! The single warp filter that serves every path.
//!
//! warp only extracts the request parts here; [`Route::resolve`] decides
//! which operation a path addresses.

mod pages;
mod random;
mod text;

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;
use warp::http::Method;
use warp::path::FullPath;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use super::error::{recover, ApiError};
use super::router::Route;
use crate::bootstrap::AppServices;

pub fn routes(
    services: Arc<AppServices>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    warp::method()
        .and(warp::path::full())
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .and(with_services(services))
        .and_then(dispatch)
        .recover(recover)
        .unify()
        .with(warp::trace(|info| {
            tracing::debug_span!("request", method = %info.method(), path = %info.path())
        }))
}

/// Inject the shared services
fn with_services(
    services: Arc<AppServices>,
) -> impl Filter<Extract = (Arc<AppServices>,), Error = Infallible> + Clone {
    warp::any().map(move || services.clone())
}

async fn dispatch(
    method: Method,
    path: FullPath,
    content_type: Option<String>,
    body: Bytes,
    services: Arc<AppServices>,
) -> Result<Response, Rejection> {
    let route = Route::resolve(path.as_str());
    debug!(?route, "dispatching");

    let result = match route {
        Route::Index => pages::index(&method),
        Route::Random => random::redirect(&method, &services),
        Route::Editor(_) => pages::editor(&method),
        Route::Text(name) => {
            text::handle(&method, &name, content_type.as_deref(), body, &services)
        }
        Route::NotFound => Err(ApiError::NotFound),
    };

    result.map_err(warp::reject::custom)
}
