//! HTML page handlers for the calculator wizard.
//!
//! Each handler module corresponds to one page of the flow:
//! landing (website entry), details (metrics form) and results.

pub mod details;
pub mod health;
pub mod landing;
pub mod not_found;
pub mod results;

pub use details::{details_query_handler, details_submit_handler};
pub use health::health_handler;
pub use landing::landing_handler;
pub use not_found::not_found_handler;
pub use results::calculate_handler;
