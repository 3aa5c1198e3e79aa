//! HTTP layer: the rendered page, the form endpoint and a small JSON API
//! over the same content and effect math

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use middleware::start_cleanup_task;
pub use routes::create_router;
pub use types::*;
