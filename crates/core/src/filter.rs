//! Catalog filter criteria and the visibility predicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{EcoScore, PackagingType, Product};

/// Default sustainability radius in kilometres.
const DEFAULT_RADIUS_KM: u8 = 50;

/// The storefront's current search text and filter selections.
///
/// An empty accepted set means "accept all" for that dimension. The radius
/// is a display value only; it never participates in filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive name substring.
    pub search: String,
    /// Accepted EcoScore tiers; empty accepts all.
    pub eco_scores: BTreeSet<EcoScore>,
    /// Accepted packaging types; empty accepts all.
    pub packaging_types: BTreeSet<PackagingType>,
    /// Sustainability radius in kilometres, display-only.
    pub radius_km: u8,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            eco_scores: BTreeSet::new(),
            packaging_types: BTreeSet::new(),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl FilterCriteria {
    /// Replace the search substring.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Add or remove a tier from the accepted EcoScore set.
    pub fn set_eco_score(&mut self, tier: EcoScore, included: bool) {
        if included {
            self.eco_scores.insert(tier);
        } else {
            self.eco_scores.remove(&tier);
        }
    }

    /// Add or remove a type from the accepted packaging set.
    pub fn set_packaging(&mut self, packaging: PackagingType, included: bool) {
        if included {
            self.packaging_types.insert(packaging);
        } else {
            self.packaging_types.remove(&packaging);
        }
    }

    /// Restore default criteria.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a single product passes the criteria.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = self.search.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let score_ok = self.eco_scores.is_empty() || self.eco_scores.contains(&product.eco_score);
        let packaging_ok = self.packaging_types.is_empty()
            || self.packaging_types.contains(&product.packaging);

        search_ok && score_ok && packaging_ok
    }

    /// The subsequence of `catalog` visible under these criteria.
    ///
    /// Pure and deterministic; catalog order is preserved (stable filter, no
    /// re-sort). An empty result is not an error condition.
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{Category, CurrencyCode, Price, ProductId};

    fn product(id: i32, name: &str, score: EcoScore, packaging: PackagingType) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Price::new(Decimal::from(100), CurrencyCode::INR),
            image_url: format!("https://example.com/{id}.jpg"),
            eco_score: score,
            co2_footprint: "1.0 kg CO₂e".to_string(),
            packaging,
            category: Category::Lifestyle,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Organic Cotton T-Shirt", EcoScore::APlus, PackagingType::PlantBased),
            product(2, "Solar Power Bank", EcoScore::A, PackagingType::Standard),
            product(3, "Sustainable Yoga Mat", EcoScore::B, PackagingType::Returnable),
        ]
    }

    #[test]
    fn test_empty_criteria_yield_full_catalog_in_order() {
        let catalog = catalog();
        let visible = FilterCriteria::default().visible_products(&catalog);
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("cotton");

        let visible = criteria.visible_products(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().map(|p| p.id.as_i32()), Some(1));
    }

    #[test]
    fn test_eco_score_set_filters() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_eco_score(EcoScore::APlus, true);
        criteria.set_eco_score(EcoScore::A, true);

        let ids: Vec<_> = criteria
            .visible_products(&catalog)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, [1, 2]);

        criteria.set_eco_score(EcoScore::A, false);
        let ids: Vec<_> = criteria
            .visible_products(&catalog)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn test_packaging_set_filters() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_packaging(PackagingType::Returnable, true);

        let ids: Vec<_> = criteria
            .visible_products(&catalog)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, [3]);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("solar");
        criteria.set_eco_score(EcoScore::B, true);

        assert!(criteria.visible_products(&catalog).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("a");
        criteria.set_eco_score(EcoScore::A, true);

        let once: Vec<Product> = criteria
            .visible_products(&catalog)
            .into_iter()
            .cloned()
            .collect();
        let twice = criteria.visible_products(&once);
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_radius_never_filters() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.radius_km = 0;
        assert_eq!(criteria.visible_products(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut criteria = FilterCriteria::default();
        criteria.set_search("bamboo");
        criteria.set_eco_score(EcoScore::APlus, true);
        criteria.set_packaging(PackagingType::Returnable, true);
        criteria.radius_km = 10;

        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.radius_km, 50);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("bamboo toothbrush");
        assert!(criteria.visible_products(&catalog).is_empty());
    }
}
