//! Loss estimation engine.
//!
//! [`calculate`] is a pure function: no I/O, no hidden state, and identical
//! output for identical input. Inputs must already be clamped to their
//! documented ranges (see [`crate::domain::input::RawInput`]); the engine
//! itself performs no validation.

use serde::Serialize;

use crate::domain::benchmark::BenchmarkPreset;

/// Click-through rate captured by the top cited slot in an AI answer.
pub const CITED_CTR: f64 = 0.35;

/// Year-over-year growth of AI search adoption used for the 3-year projection.
pub const AI_ADOPTION_GROWTH: f64 = 1.15;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Validated inputs for one calculation. Percentages are in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationInput {
    pub monthly_organic_traffic: f64,
    pub avg_cpc: f64,
    pub cost_per_lead: f64,
    pub conversion_rate: f64,
    pub ai_shift_pct: f64,
    pub ai_mention_rate: f64,
}

impl EstimationInput {
    /// Builds an input from a preset's defaults and the given mention rate.
    pub fn from_preset(preset: &BenchmarkPreset, ai_mention_rate: f64) -> Self {
        Self {
            monthly_organic_traffic: f64::from(preset.default_traffic),
            avg_cpc: preset.default_cpc,
            cost_per_lead: preset.default_cpl,
            conversion_rate: preset.default_conversion,
            ai_shift_pct: preset.ai_shift,
            ai_mention_rate,
        }
    }

    /// Overwrites the five preset-backed fields, keeping the mention rate.
    pub fn apply_preset(&mut self, preset: &BenchmarkPreset) {
        *self = Self::from_preset(preset, self.ai_mention_rate);
    }
}

/// Derived figures from one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationResult {
    pub estimated_ai_queries: f64,
    pub lost_clicks: u64,
    pub monthly_loss_cpc: f64,
    pub annual_loss_cpc: f64,
    pub three_year_loss_cpc: f64,
    /// Fractional leads are kept; only display rounds them.
    pub lost_leads: f64,
    pub monthly_loss_cpl: f64,
    pub annual_loss_cpl: f64,
    pub three_year_loss_cpl: f64,
    pub potential_clicks_if_visible: u64,
}

/// The upside of being cited at [`CITED_CTR`] on every AI-surfaced query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Opportunity {
    pub potential_clicks: u64,
    pub potential_leads: f64,
    pub monthly_pipeline_value: f64,
}

/// Share of AI-surfaced clicks lost at the given mention rate.
///
/// `1.0` at a 0% mention rate, `0.65` at 100%.
pub fn loss_rate(ai_mention_rate: f64) -> f64 {
    1.0 - (ai_mention_rate / 100.0) * CITED_CTR
}

/// Sums three years of an annual figure growing at [`AI_ADOPTION_GROWTH`].
pub fn three_year_projection(annual: f64) -> f64 {
    annual + annual * AI_ADOPTION_GROWTH + annual * AI_ADOPTION_GROWTH * AI_ADOPTION_GROWTH
}

// Non-negative input only: half rounds up.
fn round_clicks(value: f64) -> u64 {
    value.round() as u64
}

/// Runs the loss estimation for one input record.
pub fn calculate(input: &EstimationInput) -> EstimationResult {
    let estimated_ai_queries = input.monthly_organic_traffic * (input.ai_shift_pct / 100.0);

    let lost_clicks = round_clicks(estimated_ai_queries * loss_rate(input.ai_mention_rate));

    let monthly_loss_cpc = lost_clicks as f64 * input.avg_cpc;
    let annual_loss_cpc = monthly_loss_cpc * MONTHS_PER_YEAR;

    let lost_leads = lost_clicks as f64 * (input.conversion_rate / 100.0);
    let monthly_loss_cpl = lost_leads * input.cost_per_lead;
    let annual_loss_cpl = monthly_loss_cpl * MONTHS_PER_YEAR;

    EstimationResult {
        estimated_ai_queries,
        lost_clicks,
        monthly_loss_cpc,
        annual_loss_cpc,
        three_year_loss_cpc: three_year_projection(annual_loss_cpc),
        lost_leads,
        monthly_loss_cpl,
        annual_loss_cpl,
        three_year_loss_cpl: three_year_projection(annual_loss_cpl),
        potential_clicks_if_visible: round_clicks(estimated_ai_queries * CITED_CTR),
    }
}

/// Derives the upside panel figures from an input and its result.
pub fn opportunity(input: &EstimationInput, result: &EstimationResult) -> Opportunity {
    let potential_leads =
        result.potential_clicks_if_visible as f64 * (input.conversion_rate / 100.0);

    Opportunity {
        potential_clicks: result.potential_clicks_if_visible,
        potential_leads,
        monthly_pipeline_value: potential_leads * input.cost_per_lead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmark;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn crm_input(ai_mention_rate: f64) -> EstimationInput {
        EstimationInput {
            monthly_organic_traffic: 45_000.0,
            avg_cpc: 12.5,
            cost_per_lead: 180.0,
            conversion_rate: 3.2,
            ai_shift_pct: 32.0,
            ai_mention_rate,
        }
    }

    #[test]
    fn test_crm_scenario_invisible_brand() {
        let result = calculate(&crm_input(0.0));

        assert_close(result.estimated_ai_queries, 14_400.0);
        assert_eq!(result.lost_clicks, 14_400);
        assert_close(result.monthly_loss_cpc, 180_000.0);
        assert_close(result.annual_loss_cpc, 2_160_000.0);
        assert_close(result.three_year_loss_cpc, 7_500_600.0);
        assert_close(result.lost_leads, 460.8);
        assert_close(result.monthly_loss_cpl, 82_944.0);
        assert_close(result.annual_loss_cpl, 995_328.0);
        assert_close(result.three_year_loss_cpl, 995_328.0 * 3.4725);
        assert_eq!(result.potential_clicks_if_visible, 5_040);
    }

    #[test]
    fn test_crm_scenario_always_cited() {
        let result = calculate(&crm_input(100.0));

        assert_eq!(result.lost_clicks, 9_360);
        assert_close(result.monthly_loss_cpc, 117_000.0);
        assert_close(result.annual_loss_cpc, 1_404_000.0);
        assert_eq!(result.potential_clicks_if_visible, 5_040);
    }

    #[test]
    fn test_loss_rate_bounds() {
        assert_eq!(loss_rate(0.0), 1.0);
        assert_close(loss_rate(100.0), 0.65);
        assert_close(loss_rate(50.0), 0.825);
    }

    #[test]
    fn test_three_year_projection_multiplier() {
        assert_close(three_year_projection(1.0), 3.4725);
        assert_close(three_year_projection(2_160_000.0), 2_160_000.0 * 3.4725);
        assert_eq!(three_year_projection(0.0), 0.0);
    }

    #[test]
    fn test_zero_traffic_yields_all_zero() {
        let input = EstimationInput {
            monthly_organic_traffic: 0.0,
            ..crm_input(40.0)
        };
        let result = calculate(&input);

        assert_eq!(result.estimated_ai_queries, 0.0);
        assert_eq!(result.lost_clicks, 0);
        assert_eq!(result.monthly_loss_cpc, 0.0);
        assert_eq!(result.annual_loss_cpc, 0.0);
        assert_eq!(result.three_year_loss_cpc, 0.0);
        assert_eq!(result.lost_leads, 0.0);
        assert_eq!(result.monthly_loss_cpl, 0.0);
        assert_eq!(result.annual_loss_cpl, 0.0);
        assert_eq!(result.three_year_loss_cpl, 0.0);
        assert_eq!(result.potential_clicks_if_visible, 0);
    }

    #[test]
    fn test_all_zero_input() {
        let input = EstimationInput {
            monthly_organic_traffic: 0.0,
            avg_cpc: 0.0,
            cost_per_lead: 0.0,
            conversion_rate: 0.0,
            ai_shift_pct: 0.0,
            ai_mention_rate: 0.0,
        };
        let result = calculate(&input);

        assert_eq!(result.lost_clicks, 0);
        assert_eq!(result.three_year_loss_cpl, 0.0);
    }

    #[test]
    fn test_lost_clicks_round_half_up() {
        // 10 * 0.25 = 2.5 queries, full loss
        let input = EstimationInput {
            monthly_organic_traffic: 10.0,
            ai_shift_pct: 25.0,
            ..crm_input(0.0)
        };
        assert_eq!(calculate(&input).lost_clicks, 3);
    }

    #[test]
    fn test_lost_leads_are_not_rounded() {
        let input = EstimationInput {
            conversion_rate: 2.5,
            ..crm_input(0.0)
        };
        let result = calculate(&input);
        assert_close(result.lost_leads, 360.0);

        let input = EstimationInput {
            monthly_organic_traffic: 100.0,
            ai_shift_pct: 10.0,
            conversion_rate: 3.0,
            ..crm_input(0.0)
        };
        assert_close(calculate(&input).lost_leads, 0.3);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let input = crm_input(35.0);
        let first = calculate(&input);
        let second = calculate(&input);

        assert_eq!(first, second);
        assert_eq!(
            first.three_year_loss_cpl.to_bits(),
            second.three_year_loss_cpl.to_bits()
        );
    }

    #[test]
    fn test_from_preset_copies_defaults() {
        let preset = benchmark::lookup("Email Marketing").unwrap();
        let input = EstimationInput::from_preset(preset, 15.0);

        assert_eq!(input.monthly_organic_traffic, 28_000.0);
        assert_eq!(input.avg_cpc, 6.8);
        assert_eq!(input.cost_per_lead, 95.0);
        assert_eq!(input.conversion_rate, 3.8);
        assert_eq!(input.ai_shift_pct, 35.0);
        assert_eq!(input.ai_mention_rate, 15.0);
    }

    #[test]
    fn test_apply_preset_keeps_mention_rate() {
        let mut input = crm_input(70.0);
        input.apply_preset(benchmark::lookup("Cloud Storage").unwrap());

        assert_eq!(input.monthly_organic_traffic, 50_000.0);
        assert_eq!(input.avg_cpc, 7.5);
        assert_eq!(input.ai_mention_rate, 70.0);
    }

    #[test]
    fn test_opportunity_uses_potential_clicks() {
        let input = crm_input(60.0);
        let result = calculate(&input);
        let upside = opportunity(&input, &result);

        assert_eq!(upside.potential_clicks, 5_040);
        assert_close(upside.potential_leads, 161.28);
        assert_close(upside.monthly_pipeline_value, 161.28 * 180.0);
    }
}
