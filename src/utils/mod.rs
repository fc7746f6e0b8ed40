//! Utility functions shared by the web pages and the CLI.
//!
//! - [`format`] - Count and dollar formatting for result cards
//! - [`site`] - Website entry validation and display cleaning

pub mod format;
pub mod site;
