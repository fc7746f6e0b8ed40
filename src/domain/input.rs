//! Clamping of raw form values into a valid [`EstimationInput`].
//!
//! Every field of [`RawInput`] is optional: `None` stands for an empty or
//! non-numeric entry. Non-finite numbers are treated the same way.

use crate::domain::benchmark;
use crate::domain::estimation::EstimationInput;

/// Slider range for the AI shift percentage.
pub const AI_SHIFT_RANGE: (f64, f64) = (10.0, 60.0);

/// Unvalidated calculator values as entered by a user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    pub monthly_organic_traffic: Option<f64>,
    pub avg_cpc: Option<f64>,
    pub cost_per_lead: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub ai_shift_pct: Option<f64>,
    pub ai_mention_rate: Option<f64>,
}

impl From<EstimationInput> for RawInput {
    fn from(input: EstimationInput) -> Self {
        Self {
            monthly_organic_traffic: Some(input.monthly_organic_traffic),
            avg_cpc: Some(input.avg_cpc),
            cost_per_lead: Some(input.cost_per_lead),
            conversion_rate: Some(input.conversion_rate),
            ai_shift_pct: Some(input.ai_shift_pct),
            ai_mention_rate: Some(input.ai_mention_rate),
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl RawInput {
    /// Clamps every field into its documented range.
    ///
    /// - traffic: whole number, at least 0 (missing: 0)
    /// - CPC and CPL: at least 0 (missing: 0)
    /// - conversion rate: `[0, 100]` (missing: 0)
    /// - AI shift: whole number in [`AI_SHIFT_RANGE`] (missing: default preset)
    /// - AI mention rate: whole number in `[0, 100]` (missing: 0)
    pub fn clamp(self) -> EstimationInput {
        let (shift_min, shift_max) = AI_SHIFT_RANGE;

        EstimationInput {
            monthly_organic_traffic: finite(self.monthly_organic_traffic)
                .map_or(0.0, |v| v.trunc().max(0.0)),
            avg_cpc: finite(self.avg_cpc).map_or(0.0, |v| v.max(0.0)),
            cost_per_lead: finite(self.cost_per_lead).map_or(0.0, |v| v.max(0.0)),
            conversion_rate: finite(self.conversion_rate).map_or(0.0, |v| v.clamp(0.0, 100.0)),
            ai_shift_pct: finite(self.ai_shift_pct)
                .map_or(benchmark::default_preset().ai_shift, |v| {
                    v.trunc().clamp(shift_min, shift_max)
                }),
            ai_mention_rate: finite(self.ai_mention_rate)
                .map_or(0.0, |v| v.trunc().clamp(0.0, 100.0)),
        }
    }
}
