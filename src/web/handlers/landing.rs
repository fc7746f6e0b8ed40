//! Landing page handler (wizard step 1).

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// One entry of the "How It Works" section.
pub struct HowItWorksStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        number: 1,
        title: "Enter Your Website",
        description: "Drop in your URL. We use your industry to set CPC, CPL, and AI shift benchmarks automatically.",
    },
    HowItWorksStep {
        number: 2,
        title: "Adjust Your Numbers",
        description: "Fine-tune your organic traffic, cost metrics, and how often AI mentions your brand today.",
    },
    HowItWorksStep {
        number: 3,
        title: "See the Revenue Impact",
        description: "Get a clear breakdown of lost clicks, lost leads, and the dollar value of your AI search gap.",
    },
];

/// Template for the landing page.
///
/// Renders `templates/landing.html` with:
/// - Hero and website entry form
/// - Validation message when the previous entry was rejected
/// - "How It Works" steps
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub website: String,
    pub error: Option<String>,
    pub steps: &'static [HowItWorksStep],
}

impl LandingTemplate {
    pub fn new() -> Self {
        Self {
            website: String::new(),
            error: None,
            steps: &HOW_IT_WORKS,
        }
    }

    /// Landing page re-rendered with the rejected entry and a message.
    pub fn rejected(website: String, error: String) -> Self {
        Self {
            website,
            error: Some(error),
            steps: &HOW_IT_WORKS,
        }
    }
}

impl Default for LandingTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler() -> impl IntoResponse {
    LandingTemplate::new()
}
