//! # AI Search ROI Calculator
//!
//! Estimates the revenue a brand loses when AI answer engines (ChatGPT,
//! Perplexity, Gemini, Google AI Overviews) answer its buyers' queries without
//! citing it, and serves the estimate as a small server-rendered web wizard.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Benchmark catalog, input clamping and the pure estimation engine
//! - **Application Layer** ([`application`]) - Prefill and report orchestration
//! - **Web Layer** ([`web`]) - Askama pages, forms and middleware
//! - **Utilities** ([`utils`]) - Number formatting and website cleaning
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the web calculator on :3000
//! cargo run
//!
//! # Or use the terminal version
//! cargo run --bin roi -- estimate --industry "Cybersecurity" --mention-rate 20
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CalculatorService, Prefill};
    pub use crate::domain::benchmark::{self, BenchmarkPreset};
    pub use crate::domain::estimation::{
        self, EstimationInput, EstimationResult, Opportunity, calculate,
    };
    pub use crate::domain::input::RawInput;
    pub use crate::domain::report::Report;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
