//! Details form handlers (wizard step 2).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::application::services::Prefill;
use crate::domain::input::AI_SHIFT_RANGE;
use crate::error::{AppError, first_message};
use crate::state::AppState;
use crate::utils::site::clean_site;
use crate::web::dto::{CalculatorForm, SiteForm};
use crate::web::handlers::landing::LandingTemplate;

/// One `<option>` of the industry selector.
pub struct IndustryOption {
    pub name: &'static str,
    pub selected: bool,
}

/// Template for the details form.
///
/// Renders `templates/details.html` with the industry selector and every
/// metric prefilled, either from a benchmark or from submitted values.
#[derive(Template, WebTemplate)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    pub website: String,
    pub display_site: String,
    pub industry: String,
    pub custom_industry: bool,
    pub industries: Vec<IndustryOption>,
    pub traffic: f64,
    pub cpc: f64,
    pub cpl: f64,
    pub conversion: f64,
    pub ai_shift: f64,
    pub ai_shift_min: f64,
    pub ai_shift_max: f64,
    pub mention_rate: f64,
}

impl DetailsTemplate {
    pub fn new(state: &AppState, website: String, prefill: Prefill) -> Self {
        let industries = state
            .calculator
            .presets()
            .iter()
            .map(|preset| IndustryOption {
                name: preset.name,
                selected: prefill.preset.is_some_and(|p| p.name == preset.name),
            })
            .collect();

        let (ai_shift_min, ai_shift_max) = AI_SHIFT_RANGE;

        Self {
            display_site: clean_site(&website),
            website,
            custom_industry: prefill.is_custom(),
            industry: prefill.industry,
            industries,
            traffic: prefill.input.monthly_organic_traffic,
            cpc: prefill.input.avg_cpc,
            cpl: prefill.input.cost_per_lead,
            conversion: prefill.input.conversion_rate,
            ai_shift: prefill.input.ai_shift_pct,
            ai_shift_min,
            ai_shift_max,
            mention_rate: prefill.input.ai_mention_rate,
        }
    }
}

/// Accepts the website entry and renders the details form.
///
/// # Endpoint
///
/// `POST /details`
///
/// # Behavior
///
/// A blank or malformed website re-renders the landing page with a message
/// and `422 Unprocessable Entity`. Otherwise the form is prefilled from the
/// default benchmark with a 0% mention rate.
pub async fn details_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<SiteForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        let message = first_message(&errors);
        tracing::debug!(website = %form.website, %message, "Website rejected");

        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            LandingTemplate::rejected(form.website, message),
        )
            .into_response();
    }

    let prefill = state.calculator.initial();
    let website = form.website.trim().to_string();

    DetailsTemplate::new(&state, website, prefill).into_response()
}

/// Re-renders the details form with submitted values or a newly selected benchmark.
///
/// # Endpoint
///
/// `GET /details?website=...&industry=...&traffic=...[&apply=1]`
///
/// # Behavior
///
/// Without `apply` the submitted values are shown as-is (the "adjust" link on
/// the results page). With `apply`, a catalog industry overwrites traffic,
/// CPC, CPL, conversion and AI shift with its benchmark values. An unknown
/// industry keeps the submitted values.
/// The mention rate is always kept.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the website is blank or malformed.
pub async fn details_query_handler(
    State(state): State<AppState>,
    Query(form): Query<CalculatorForm>,
) -> Result<DetailsTemplate, AppError> {
    form.validate()?;

    let current = form.raw_input().clamp();
    let prefill = if form.applies_benchmark() {
        state.calculator.prefill(&form.industry, current)
    } else {
        state.calculator.restore(&form.industry, current)
    };
    let website = form.website.trim().to_string();

    Ok(DetailsTemplate::new(&state, website, prefill))
}
