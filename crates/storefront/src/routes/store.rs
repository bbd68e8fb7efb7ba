//! Storefront listing route handler: search plus filter sidebar.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use ecofleet_core::{EcoScore, FilterCriteria, PackagingType};

use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// One checkbox in the filter sidebar.
#[derive(Clone)]
pub struct FilterOption {
    pub value: String,
    pub checked: bool,
}

/// Store listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "store/index.html")]
pub struct StoreIndexTemplate {
    pub products: Vec<ProductView>,
    pub result_count: usize,
    pub search: String,
    pub score_options: Vec<FilterOption>,
    pub packaging_options: Vec<FilterOption>,
    pub radius_km: u8,
}

/// Build filter criteria from the raw query pairs.
///
/// Checkbox groups repeat their key (`eco=A%2B&eco=A`), which is why this
/// takes the raw pairs rather than a struct. Unknown keys and unknown set
/// values are ignored; the radius is display-only and clamped to the
/// slider range.
fn criteria_from_query(params: &[(String, String)]) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    for (key, value) in params {
        match key.as_str() {
            "q" => criteria.set_search(value.clone()),
            "eco" => {
                if let Ok(tier) = value.parse::<EcoScore>() {
                    criteria.set_eco_score(tier, true);
                }
            }
            "packaging" => {
                if let Ok(packaging) = value.parse::<PackagingType>() {
                    criteria.set_packaging(packaging, true);
                }
            }
            "radius" => {
                if let Ok(radius) = value.parse::<u8>() {
                    criteria.radius_km = radius.min(100);
                }
            }
            _ => {}
        }
    }
    criteria
}

/// Display the store listing, filtered by the query string.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let criteria = criteria_from_query(&params);

    let products: Vec<ProductView> = criteria
        .visible_products(state.catalog().products())
        .into_iter()
        .map(ProductView::from)
        .collect();

    let score_options = EcoScore::ALL
        .iter()
        .map(|tier| FilterOption {
            value: tier.as_str().to_string(),
            checked: criteria.eco_scores.contains(tier),
        })
        .collect();
    let packaging_options = PackagingType::ALL
        .iter()
        .map(|packaging| FilterOption {
            value: packaging.as_str().to_string(),
            checked: criteria.packaging_types.contains(packaging),
        })
        .collect();

    StoreIndexTemplate {
        result_count: products.len(),
        products,
        search: criteria.search,
        score_options,
        packaging_options,
        radius_km: criteria.radius_km,
    }
}
