//! Application layer services implementing the calculator's use cases.
//!
//! Services coordinate the domain catalog and engine and provide a small API
//! for HTTP handlers and the command-line tool.
//!
//! # Available Services
//!
//! - [`services::calculator_service::CalculatorService`] - Benchmark prefill and report generation

pub mod services;
