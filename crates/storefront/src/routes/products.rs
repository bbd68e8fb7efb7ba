//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use ecofleet_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Number of related products shown under the detail page.
const RELATED_LIMIT: usize = 4;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub eco_score: String,
    pub co2_footprint: String,
    pub packaging: String,
    pub category: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image_url: product.image_url.clone(),
            eco_score: product.eco_score.to_string(),
            co2_footprint: product.co2_footprint.clone(),
            packaging: product.packaging.to_string(),
            category: product.category.to_string(),
        }
    }
}

/// Classifier verdict display data.
#[derive(Clone)]
pub struct EcoVerdictView {
    pub score: String,
    pub justification: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
    pub verdict: EcoVerdictView,
    pub related_products: Vec<ProductView>,
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let verdict = state.eco_score(product).await;
    let related_products = state
        .catalog()
        .related_to(product, RELATED_LIMIT)
        .into_iter()
        .map(ProductView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductView::from(product),
        verdict: EcoVerdictView {
            score: verdict.eco_score.to_string(),
            justification: verdict.justification,
        },
        related_products,
    })
}
