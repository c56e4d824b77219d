//! HTTP hosting subsystem: the Axum-backed demo service.

pub mod server;

pub use server::{HttpServer, HttpServerError, demo_router};
