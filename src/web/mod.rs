//! Web layer for the browser-based calculator.
//!
//! Provides the three wizard pages and a health check. Uses Askama templates
//! for server-side rendering; no client-side state is required.
//!
//! # Modules
//!
//! - [`dto`] - Form payloads and health response
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Tracing and rate limiting
//! - [`routes`] - Page route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
