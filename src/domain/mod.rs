//! Domain layer containing the calculator's data model and engine.
//!
//! Nothing in this module performs I/O; it is shared by the web pages and
//! the `roi` command-line tool.
//!
//! # Modules
//!
//! - [`benchmark`] - Static industry benchmark catalog
//! - [`input`] - Clamping of raw user entries into engine input
//! - [`estimation`] - The loss estimation engine
//! - [`report`] - A calculation together with its display context
//!
//! # Calculation Flow
//!
//! 1. The caller picks a [`benchmark::BenchmarkPreset`] or keeps custom values
//! 2. Raw entries are clamped through [`input::RawInput::clamp`]
//! 3. [`estimation::calculate`] runs once and returns the derived figures
//! 4. Formatting and display are left to the caller

pub mod benchmark;
pub mod estimation;
pub mod input;
pub mod report;
