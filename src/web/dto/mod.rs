//! Data Transfer Objects for form payloads and the health response.

pub mod forms;
pub mod health;

pub use forms::{CalculatorForm, SiteForm};
