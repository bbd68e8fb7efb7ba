//! Application state shared across handlers.

use std::sync::Arc;

use ecofleet_core::{Product, ProductId};
use moka::future::Cache;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::ecoscore::{EcoScoreClient, EcoScoreResult};

/// Maximum number of memoized classifier verdicts.
const SCORE_CACHE_CAPACITY: u64 = 256;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog and the classifier client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    ecoscore: EcoScoreClient,
    score_cache: Cache<ProductId, EcoScoreResult>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let ecoscore = EcoScoreClient::new(&config.ecoscore);
        let score_cache = Cache::new(SCORE_CACHE_CAPACITY);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::sample(),
                ecoscore,
                score_cache,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Classify a product, memoized per product id.
    ///
    /// The first call per product issues the remote request; later calls
    /// (and concurrent ones) share the memoized verdict. Failures resolve to
    /// the static fallback, which is memoized like any other verdict.
    pub async fn eco_score(&self, product: &Product) -> EcoScoreResult {
        let client = self.inner.ecoscore.clone();
        let name = product.name.clone();
        let description = product.description.clone();
        self.inner
            .score_cache
            .get_with(product.id, async move {
                client.classify(&name, &description).await
            })
            .await
    }
}
