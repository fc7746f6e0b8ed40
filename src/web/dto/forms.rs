//! Form payloads for the calculator pages.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::input::RawInput;
use crate::utils::site::validate_site;

/// Step 1: website entry.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SiteForm {
    #[serde(default)]
    #[validate(length(max = 2048, message = "Website is too long"))]
    #[validate(custom(function = "validate_site"))]
    pub website: String,
}

/// Step 2: industry selection and calculator metrics.
///
/// Used both as the `GET /details` query (re-applying a benchmark) and the
/// `POST /calculate` body. Numeric fields that are empty or do not parse
/// deserialize as `None` and are clamped later.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CalculatorForm {
    #[serde(default)]
    #[validate(length(max = 2048, message = "Website is too long"))]
    #[validate(custom(function = "validate_site"))]
    pub website: String,

    #[serde(default)]
    #[validate(length(max = 120, message = "Industry name is too long"))]
    pub industry: String,

    #[serde_as(deserialize_as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub traffic: Option<f64>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub cpc: Option<f64>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub cpl: Option<f64>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub conversion: Option<f64>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub ai_shift: Option<f64>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub mention_rate: Option<f64>,

    /// Present when the "Apply benchmark" button submitted the form.
    #[serde(default)]
    pub apply: Option<String>,
}

impl CalculatorForm {
    /// Returns true if the selected industry's benchmark should overwrite the metrics.
    pub fn applies_benchmark(&self) -> bool {
        self.apply.is_some()
    }

    /// Submitted metrics, before clamping.
    pub fn raw_input(&self) -> RawInput {
        RawInput {
            monthly_organic_traffic: self.traffic,
            avg_cpc: self.cpc,
            cost_per_lead: self.cpl,
            conversion_rate: self.conversion,
            ai_shift_pct: self.ai_shift,
            ai_mention_rate: self.mention_rate,
        }
    }
}
