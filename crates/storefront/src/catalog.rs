//! The static product catalog.
//!
//! A fixed, read-only ordered collection of products. The real inventory
//! lives with an external collaborator; until that lands the storefront
//! serves this sample data.

use ecofleet_core::{
    Category, CurrencyCode, EcoScore, PackagingType, Price, Product, ProductId,
};
use rust_decimal::Decimal;

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products sharing a category with `product`, excluding it, up to
    /// `limit`.
    #[must_use]
    pub fn related_to(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// The sample catalog (eight eco-friendly products).
    #[must_use]
    pub fn sample() -> Self {
        let rupees = |amount: i64| Price::new(Decimal::from(amount), CurrencyCode::INR);
        let products = vec![
            Product {
                id: ProductId::new(1),
                name: "Organic Cotton T-Shirt".to_string(),
                description: "Made from 100% certified organic cotton, this ultra-soft \
                              t-shirt combines comfort with environmental responsibility. \
                              Produced using sustainable farming practices that support \
                              soil health and biodiversity."
                    .to_string(),
                price: rupees(299),
                image_url:
                    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::APlus,
                co2_footprint: "0.8 kg CO₂e".to_string(),
                packaging: PackagingType::PlantBased,
                category: Category::Clothing,
            },
            Product {
                id: ProductId::new(2),
                name: "Bamboo Fiber Hoodie".to_string(),
                description: "Premium bamboo fiber hoodie that's naturally antibacterial, \
                              moisture-wicking, and incredibly soft. Bamboo grows 30x \
                              faster than cotton while absorbing more CO₂."
                    .to_string(),
                price: rupees(499),
                image_url:
                    "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::A,
                co2_footprint: "1.2 kg CO₂e".to_string(),
                packaging: PackagingType::Returnable,
                category: Category::Clothing,
            },
            Product {
                id: ProductId::new(3),
                name: "Recycled Phone Case".to_string(),
                description: "A rugged phone case moulded from ocean-bound recycled \
                              plastic. Every case diverts waste from landfill and ships \
                              in plant-based packaging."
                    .to_string(),
                price: rupees(199),
                image_url:
                    "https://images.unsplash.com/photo-1601593346740-925612772716?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::APlus,
                co2_footprint: "0.3 kg CO₂e".to_string(),
                packaging: PackagingType::PlantBased,
                category: Category::Electronics,
            },
            Product {
                id: ProductId::new(4),
                name: "Solar Power Bank".to_string(),
                description: "A 20,000 mAh power bank that tops itself up from sunlight. \
                              Charge your devices twice over without touching the grid."
                    .to_string(),
                price: rupees(799),
                image_url:
                    "https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::A,
                co2_footprint: "2.1 kg CO₂e".to_string(),
                packaging: PackagingType::Standard,
                category: Category::Electronics,
            },
            Product {
                id: ProductId::new(5),
                name: "Biodegradable Soap Bar".to_string(),
                description: "Cold-pressed soap made from food-grade plant oils. Fully \
                              biodegradable, palm-oil free, and wrapped in compostable \
                              paper."
                    .to_string(),
                price: rupees(89),
                image_url:
                    "https://images.unsplash.com/photo-1585022150787-c6ec2dac4e2c?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::APlus,
                co2_footprint: "0.1 kg CO₂e".to_string(),
                packaging: PackagingType::PlantBased,
                category: Category::PersonalCare,
            },
            Product {
                id: ProductId::new(6),
                name: "Sustainable Yoga Mat".to_string(),
                description: "A natural-rubber yoga mat with a cork surface. Durable and \
                              grippy, though rubber processing keeps its footprint above \
                              our top tiers."
                    .to_string(),
                price: rupees(899),
                image_url:
                    "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::B,
                co2_footprint: "3.2 kg CO₂e".to_string(),
                packaging: PackagingType::Returnable,
                category: Category::Fitness,
            },
            Product {
                id: ProductId::new(7),
                name: "Organic Coffee Beans".to_string(),
                description: "Shade-grown arabica from smallholder cooperatives, roasted \
                              locally and shipped in home-compostable pouches."
                    .to_string(),
                price: rupees(249),
                image_url:
                    "https://images.unsplash.com/photo-1587080461634-8c0c9e5de3e6?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::A,
                co2_footprint: "1.8 kg CO₂e".to_string(),
                packaging: PackagingType::PlantBased,
                category: Category::Food,
            },
            Product {
                id: ProductId::new(8),
                name: "Reusable Water Bottle".to_string(),
                description: "A double-walled stainless steel bottle built to replace \
                              thousands of single-use plastics over its lifetime."
                    .to_string(),
                price: rupees(349),
                image_url:
                    "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=400&h=400&fit=crop"
                        .to_string(),
                eco_score: EcoScore::APlus,
                co2_footprint: "0.9 kg CO₂e".to_string(),
                packaging: PackagingType::Standard,
                category: Category::Lifestyle,
            },
        ];

        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_unique_stable_ids() {
        let catalog = Catalog::sample();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::sample();
        let product = catalog.get(ProductId::new(4)).expect("product 4");
        assert_eq!(product.name, "Solar Power Bank");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_related_shares_category_and_excludes_self() {
        let catalog = Catalog::sample();
        let tshirt = catalog.get(ProductId::new(1)).expect("product 1");
        let related = catalog.related_to(tshirt, 4);

        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == Category::Clothing));
        assert!(related.iter().all(|p| p.id != tshirt.id));
    }

    #[test]
    fn test_every_product_has_description_for_classifier() {
        let catalog = Catalog::sample();
        assert!(catalog.products().iter().all(|p| !p.description.is_empty()));
    }
}
