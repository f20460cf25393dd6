// Web frontend module
pub mod cors;
pub mod routes;
pub mod server;

pub use routes::{build_app, create_router, AppState};
pub use server::{WebServer, WebServerConfig};
