//! Web layer for the section lookup service.
//!
//! Validates path parameters, runs lookups off the async runtime and maps
//! their outcomes onto HTTP responses.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
