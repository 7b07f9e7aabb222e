//! Smart Academy backend API service.
//!
//! A small, stateless HTTP service: every request passes through a fixed
//! middleware chain (protective security headers, permissive CORS) before
//! reaching one of two static JSON endpoints.
//!
//! # Endpoints
//!
//! ```text
//! GET /health  ->  {"status":"ok","message":"Smart Academy API is running"}
//! GET /api     ->  {"message":"Smart Academy API v1.0"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router, middleware, and HTTP handlers

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, Result};
