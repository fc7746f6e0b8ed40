use ai_search_roi::domain::estimation::{self, EstimationInput, calculate};
use ai_search_roi::domain::input::RawInput;
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = EstimationInput> {
    (
        0u32..2_000_000,
        0.0f64..500.0,
        0.0f64..5_000.0,
        0.0f64..=100.0,
        10u32..=60,
        0u32..=100,
    )
        .prop_map(|(traffic, cpc, cpl, conversion, shift, mention)| EstimationInput {
            monthly_organic_traffic: f64::from(traffic),
            avg_cpc: cpc,
            cost_per_lead: cpl,
            conversion_rate: conversion,
            ai_shift_pct: f64::from(shift),
            ai_mention_rate: f64::from(mention),
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn test_outputs_are_finite_and_non_negative(input in input_strategy()) {
        let result = calculate(&input);

        for value in [
            result.estimated_ai_queries,
            result.monthly_loss_cpc,
            result.annual_loss_cpc,
            result.three_year_loss_cpc,
            result.lost_leads,
            result.monthly_loss_cpl,
            result.annual_loss_cpl,
            result.three_year_loss_cpl,
        ] {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn test_lost_clicks_never_exceed_ai_queries(input in input_strategy()) {
        let result = calculate(&input);

        prop_assert!(result.lost_clicks as f64 <= result.estimated_ai_queries.round());
    }

    #[test]
    fn test_more_mentions_never_lose_more_clicks(input in input_strategy(), extra in 0u32..=100) {
        let cited = EstimationInput {
            ai_mention_rate: (input.ai_mention_rate + f64::from(extra)).min(100.0),
            ..input
        };

        prop_assert!(calculate(&cited).lost_clicks <= calculate(&input).lost_clicks);
    }

    #[test]
    fn test_larger_shift_never_decreases_any_loss(
        input in input_strategy(),
        shift in 0u32..=100,
        extra in 0u32..=100,
    ) {
        let base = EstimationInput {
            ai_shift_pct: f64::from(shift),
            ..input
        };
        let shifted = EstimationInput {
            ai_shift_pct: f64::from((shift + extra).min(100)),
            ..input
        };
        let low = calculate(&base);
        let high = calculate(&shifted);

        prop_assert!(high.estimated_ai_queries >= low.estimated_ai_queries);
        prop_assert!(high.lost_clicks >= low.lost_clicks);
        prop_assert!(high.monthly_loss_cpc >= low.monthly_loss_cpc);
        prop_assert!(high.annual_loss_cpc >= low.annual_loss_cpc);
        prop_assert!(high.three_year_loss_cpc >= low.three_year_loss_cpc);
        prop_assert!(high.lost_leads >= low.lost_leads);
        prop_assert!(high.monthly_loss_cpl >= low.monthly_loss_cpl);
        prop_assert!(high.annual_loss_cpl >= low.annual_loss_cpl);
        prop_assert!(high.three_year_loss_cpl >= low.three_year_loss_cpl);
        prop_assert!(high.potential_clicks_if_visible >= low.potential_clicks_if_visible);
    }

    #[test]
    fn test_three_year_is_growth_multiple_of_annual(input in input_strategy()) {
        let result = calculate(&input);

        prop_assert!(close(result.three_year_loss_cpc, result.annual_loss_cpc * 3.4725));
        prop_assert!(close(result.three_year_loss_cpl, result.annual_loss_cpl * 3.4725));
        prop_assert!(close(result.annual_loss_cpc, result.monthly_loss_cpc * 12.0));
    }

    #[test]
    fn test_opportunity_matches_potential_clicks(input in input_strategy()) {
        let result = calculate(&input);
        let upside = estimation::opportunity(&input, &result);

        prop_assert_eq!(upside.potential_clicks, result.potential_clicks_if_visible);
        prop_assert!(close(
            upside.monthly_pipeline_value,
            upside.potential_leads * input.cost_per_lead
        ));
    }

    #[test]
    fn test_clamped_input_is_always_in_range(
        traffic in proptest::option::of(-1e7f64..1e7),
        conversion in proptest::option::of(-50.0f64..200.0),
        shift in proptest::option::of(-100.0f64..200.0),
        mention in proptest::option::of(-100.0f64..200.0),
    ) {
        let input = RawInput {
            monthly_organic_traffic: traffic,
            conversion_rate: conversion,
            ai_shift_pct: shift,
            ai_mention_rate: mention,
            ..RawInput::default()
        }
        .clamp();

        prop_assert!(input.monthly_organic_traffic >= 0.0);
        prop_assert_eq!(input.monthly_organic_traffic.fract(), 0.0);
        prop_assert!((0.0..=100.0).contains(&input.conversion_rate));
        prop_assert!((10.0..=60.0).contains(&input.ai_shift_pct));
        prop_assert!((0.0..=100.0).contains(&input.ai_mention_rate));
    }
}
