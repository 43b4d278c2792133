pub mod error;
pub mod router;
pub mod routes;
pub mod webserver;

pub use error::ApiError;
pub use router::Route;
pub use routes::routes;
pub use webserver::WebServer;
