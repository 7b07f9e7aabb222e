//! HTTP API module: router, middleware, and handlers.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_router;
pub use server::serve;
