//! Report entity bundling one calculation with its context.

use serde::Serialize;

use crate::domain::estimation::{EstimationInput, EstimationResult, Opportunity};

/// Everything needed to render one set of results. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Website as entered, cleaned for display.
    pub website: String,
    /// Preset name or a user-supplied custom label.
    pub industry: String,
    pub input: EstimationInput,
    pub result: EstimationResult,
    pub opportunity: Opportunity,
}
