//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

// =============================================================================
// Static landing content
// =============================================================================

/// An animated impact counter on the landing page.
#[derive(Clone)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

/// One step in the how-it-works strip.
#[derive(Clone)]
pub struct StepView {
    pub number: u8,
    pub title: String,
    pub description: String,
}

/// Impact counters shown in the stats section.
fn get_impact_stats() -> Vec<StatView> {
    vec![
        StatView {
            value: "4.2 tons".to_string(),
            label: "CO₂ Saved".to_string(),
        },
        StatView {
            value: "780kg".to_string(),
            label: "Plastic Avoided".to_string(),
        },
        StatView {
            value: "12,000+".to_string(),
            label: "Active Users".to_string(),
        },
        StatView {
            value: "2,300+".to_string(),
            label: "Verified Products".to_string(),
        },
    ]
}

/// The three how-it-works steps.
fn get_steps() -> Vec<StepView> {
    vec![
        StepView {
            number: 1,
            title: "Discover".to_string(),
            description: "Browse eco-friendly products with AI-verified EcoScore ratings. \
                          Every item is certified for sustainability impact."
                .to_string(),
        },
        StepView {
            number: 2,
            title: "Optimize".to_string(),
            description: "Smart checkout with optimized packaging and green delivery routes. \
                          Minimize environmental impact automatically."
                .to_string(),
        },
        StepView {
            number: 3,
            title: "Track Impact".to_string(),
            description: "Monitor your sustainability journey with personalized dashboards. \
                          See your real environmental contribution."
                .to_string(),
        },
    ]
}

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub stats: Vec<StatView>,
    pub steps: Vec<StepView>,
}

/// Display the landing page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        stats: get_impact_stats(),
        steps: get_steps(),
    }
}
