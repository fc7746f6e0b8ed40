//! Results page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use url::form_urlencoded;
use validator::Validate;

use crate::domain::report::Report;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::format::{format_count, format_dollars, format_dollars_full};
use crate::web::dto::CalculatorForm;

/// A single result card.
pub struct ResultCard {
    pub label: &'static str,
    pub value: String,
    pub sub: String,
    pub highlight: bool,
}

impl ResultCard {
    fn new(label: &'static str, value: String, sub: String) -> Self {
        Self {
            label,
            value,
            sub,
            highlight: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// Template for the results page.
///
/// Renders `templates/results.html` with:
/// - Summary line for the submitted metrics
/// - Traffic, CPC-based and CPL-based cards
/// - Upside panel and call-to-action
#[derive(Template, WebTemplate)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub site: String,
    pub summary: String,
    pub overview: Vec<ResultCard>,
    pub cpc_cards: Vec<ResultCard>,
    pub cpl_cards: Vec<ResultCard>,
    pub potential_clicks: String,
    pub potential_leads: String,
    pub pipeline_value: String,
    pub edit_link: String,
    pub cta_url: String,
}

const GROWTH_NOTE: &str = "With 15% YoY growth in AI search adoption";

impl ResultsTemplate {
    pub fn new(report: &Report, website: &str, cta_url: &str) -> Self {
        let input = &report.input;
        let result = &report.result;
        let traffic = format_count(input.monthly_organic_traffic);

        let overview = vec![
            ResultCard::new(
                "Queries Shifting to AI",
                format_count(result.estimated_ai_queries),
                format!("{}% of {traffic} organic visits", input.ai_shift_pct),
            ),
            ResultCard::new(
                "Monthly Lost Clicks",
                format_count(result.lost_clicks as f64),
                "Clicks going to competitors cited in AI responses".to_string(),
            ),
            ResultCard::new(
                "Monthly Lost Leads",
                format_count(result.lost_leads),
                format!("At {}% conversion rate", input.conversion_rate),
            ),
        ];

        let cpc_cards = vec![
            ResultCard::new(
                "Monthly Loss (CPC)",
                format_dollars_full(result.monthly_loss_cpc),
                format!(
                    "{} clicks x ${}",
                    format_count(result.lost_clicks as f64),
                    input.avg_cpc
                ),
            ),
            ResultCard::new(
                "Annual Loss (CPC)",
                format_dollars(result.annual_loss_cpc),
                "What you'd pay in ads to replace these clicks".to_string(),
            )
            .highlighted(),
            ResultCard::new(
                "3-Year Loss (CPC)",
                format_dollars(result.three_year_loss_cpc),
                GROWTH_NOTE.to_string(),
            ),
        ];

        let cpl_cards = vec![
            ResultCard::new(
                "Monthly Loss (CPL)",
                format_dollars_full(result.monthly_loss_cpl),
                format!(
                    "{} leads x ${}",
                    format_count(result.lost_leads),
                    format_count(input.cost_per_lead)
                ),
            ),
            ResultCard::new(
                "Annual Loss (CPL)",
                format_dollars(result.annual_loss_cpl),
                "Revenue-equivalent lost from missing AI citations".to_string(),
            )
            .highlighted(),
            ResultCard::new(
                "3-Year Loss (CPL)",
                format_dollars(result.three_year_loss_cpl),
                GROWTH_NOTE.to_string(),
            ),
        ];

        Self {
            site: report.website.clone(),
            summary: format!(
                "{} \u{b7} {traffic} monthly organic visitors \u{b7} {}% AI mention rate",
                report.industry, input.ai_mention_rate
            ),
            overview,
            cpc_cards,
            cpl_cards,
            potential_clicks: format_count(report.opportunity.potential_clicks as f64),
            potential_leads: format_count(report.opportunity.potential_leads),
            pipeline_value: format_dollars_full(report.opportunity.monthly_pipeline_value),
            edit_link: edit_link(report, website),
            cta_url: cta_url.to_string(),
        }
    }
}

/// Link back to the details form with the submitted values.
fn edit_link(report: &Report, website: &str) -> String {
    let input = &report.input;
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("website", website)
        .append_pair("industry", &report.industry)
        .append_pair("traffic", &input.monthly_organic_traffic.to_string())
        .append_pair("cpc", &input.avg_cpc.to_string())
        .append_pair("cpl", &input.cost_per_lead.to_string())
        .append_pair("conversion", &input.conversion_rate.to_string())
        .append_pair("ai_shift", &input.ai_shift_pct.to_string())
        .append_pair("mention_rate", &input.ai_mention_rate.to_string())
        .finish();

    format!("/details?{query}")
}

/// Runs the calculation and renders the results page.
///
/// # Endpoint
///
/// `POST /calculate`
///
/// # Behavior
///
/// Submitted metrics are clamped (empty or non-numeric entries become 0,
/// sliders are kept within range) before the engine runs once.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the website is blank or malformed.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Form(form): Form<CalculatorForm>,
) -> Result<ResultsTemplate, AppError> {
    form.validate()?;

    let input = form.raw_input().clamp();
    let website = form.website.trim();
    let report = state.calculator.report(website, &form.industry, input);

    Ok(ResultsTemplate::new(&report, website, &state.cta_url))
}
