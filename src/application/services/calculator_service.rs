//! Calculator service: preset prefill and report generation.

use crate::domain::benchmark::{self, BenchmarkPreset};
use crate::domain::estimation::{self, EstimationInput};
use crate::domain::report::Report;
use crate::utils::site::clean_site;

/// Label used when a custom industry is submitted without a name.
pub const CUSTOM_INDUSTRY_LABEL: &str = "Custom";

/// Form values after an industry selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefill {
    /// Industry label to show and carry forward.
    pub industry: String,
    pub input: EstimationInput,
    /// The matched preset, `None` for a custom row.
    pub preset: Option<&'static BenchmarkPreset>,
}

impl Prefill {
    /// Returns true if the industry is not in the catalog.
    pub fn is_custom(&self) -> bool {
        self.preset.is_none()
    }
}

/// Service wrapping the benchmark catalog and the estimation engine.
///
/// Holds no mutable state and is shared between requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CalculatorService {
    catalog: &'static [BenchmarkPreset],
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorService {
    /// Creates a service over the built-in benchmark catalog.
    pub fn new() -> Self {
        Self {
            catalog: benchmark::all(),
        }
    }

    /// Creates a service over a custom catalog.
    ///
    /// The first entry becomes the default preset; the catalog must not be empty.
    pub fn with_catalog(catalog: &'static [BenchmarkPreset]) -> Self {
        debug_assert!(!catalog.is_empty(), "benchmark catalog must not be empty");
        Self { catalog }
    }

    /// Presets in display order.
    pub fn presets(&self) -> &'static [BenchmarkPreset] {
        self.catalog
    }

    /// Preset used to prefill a fresh form.
    pub fn default_preset(&self) -> &'static BenchmarkPreset {
        &self.catalog[0]
    }

    /// Looks up a preset by display name.
    pub fn lookup(&self, name: &str) -> Option<&'static BenchmarkPreset> {
        benchmark::find(self.catalog, name)
    }

    /// Values for a fresh form: the default preset with a 0% mention rate.
    pub fn initial(&self) -> Prefill {
        let preset = self.default_preset();

        Prefill {
            industry: preset.name.to_string(),
            input: EstimationInput::from_preset(preset, 0.0),
            preset: Some(preset),
        }
    }

    /// Applies an industry selection to the current form values.
    ///
    /// A known industry overwrites the preset-backed fields and keeps the
    /// mention rate. An unknown one keeps every current value and only
    /// records the label.
    pub fn prefill(&self, industry: &str, current: EstimationInput) -> Prefill {
        let mut input = current;

        match self.lookup(industry) {
            Some(preset) => {
                input.apply_preset(preset);
                tracing::debug!(industry = preset.name, "Prefilled from benchmark");

                Prefill {
                    industry: preset.name.to_string(),
                    input,
                    preset: Some(preset),
                }
            }
            None => {
                tracing::debug!(industry, "Custom industry, keeping entered values");

                Prefill {
                    industry: custom_label(industry),
                    input,
                    preset: None,
                }
            }
        }
    }

    /// Restores previously submitted values without applying a benchmark.
    ///
    /// The matched preset, if any, is only used to mark the selection.
    pub fn restore(&self, industry: &str, current: EstimationInput) -> Prefill {
        match self.lookup(industry) {
            Some(preset) => Prefill {
                industry: preset.name.to_string(),
                input: current,
                preset: Some(preset),
            },
            None => Prefill {
                industry: custom_label(industry),
                input: current,
                preset: None,
            },
        }
    }

    /// Runs the engine once and assembles the report.
    pub fn report(&self, website: &str, industry: &str, input: EstimationInput) -> Report {
        let result = estimation::calculate(&input);
        let opportunity = estimation::opportunity(&input, &result);

        let industry = match self.lookup(industry) {
            Some(preset) => preset.name.to_string(),
            None => custom_label(industry),
        };

        tracing::info!(
            industry = %industry,
            lost_clicks = result.lost_clicks,
            annual_loss_cpc = result.annual_loss_cpc,
            annual_loss_cpl = result.annual_loss_cpl,
            "Calculated AI search loss"
        );

        Report {
            website: clean_site(website),
            industry,
            input,
            result,
            opportunity,
        }
    }
}

fn custom_label(industry: &str) -> String {
    let trimmed = industry.trim();
    if trimmed.is_empty() {
        CUSTOM_INDUSTRY_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}
