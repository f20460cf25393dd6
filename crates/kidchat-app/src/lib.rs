//! Kid-friendly chat relay.
//!
//! Accepts `{"message": ...}` on `POST /api/chat`, wraps it with a fixed
//! persona instruction and forwards it to an OpenAI-compatible completion API.

pub mod app;
pub mod cli;
pub mod config;
pub mod relay;
pub mod web;

pub use cli::Cli;
pub use config::{ConfigError, RelayConfig, DEFAULT_ALLOWED_ORIGINS, KID_FRIENDLY_PERSONA};
pub use relay::{relay_chat, RelayError};
pub use web::{build_app, AppState, WebServer, WebServerConfig};
