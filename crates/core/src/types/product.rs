//! Product records and their closed attribute sets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::score::EcoScore;

/// Packaging used to ship a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackagingType {
    Standard,
    #[serde(rename = "Plant-Based")]
    PlantBased,
    Returnable,
}

impl PackagingType {
    /// All packaging types, in sidebar display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::PlantBased, Self::Returnable];

    /// The display/wire string for this packaging type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::PlantBased => "Plant-Based",
            Self::Returnable => "Returnable",
        }
    }
}

impl std::fmt::Display for PackagingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`PackagingType`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown packaging type: {0}")]
pub struct PackagingTypeParseError(pub String);

impl FromStr for PackagingType {
    type Err = PackagingTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Plant-Based" => Ok(Self::PlantBased),
            "Returnable" => Ok(Self::Returnable),
            other => Err(PackagingTypeParseError(other.to_string())),
        }
    }
}

/// Product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Electronics,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Fitness,
    Food,
    Lifestyle,
}

impl Category {
    /// The display string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::PersonalCare => "Personal Care",
            Self::Fitness => "Fitness",
            Self::Food => "Food",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog product.
///
/// Sourced from the static catalog; never created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Descriptive copy shown on the detail page and fed to the eco-score
    /// classifier.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Product image URL.
    pub image_url: String,
    /// Sustainability rating tier.
    pub eco_score: EcoScore,
    /// CO₂-footprint display string (e.g., "0.8 kg CO₂e").
    pub co2_footprint: String,
    /// Packaging type tag.
    pub packaging: PackagingType,
    /// Category tag.
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::price::CurrencyCode;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Organic Cotton T-Shirt".to_string(),
            description: "Made from 100% certified organic cotton.".to_string(),
            price: Price::new(Decimal::from(299), CurrencyCode::INR),
            image_url: "https://example.com/tshirt.jpg".to_string(),
            eco_score: EcoScore::APlus,
            co2_footprint: "0.8 kg CO₂e".to_string(),
            packaging: PackagingType::PlantBased,
            category: Category::Clothing,
        }
    }

    #[test]
    fn test_packaging_wire_format() {
        let json = serde_json::to_string(&PackagingType::PlantBased).expect("serialize");
        assert_eq!(json, "\"Plant-Based\"");
        assert_eq!("Plant-Based".parse::<PackagingType>(), Ok(PackagingType::PlantBased));
        assert!("Compostable".parse::<PackagingType>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::PersonalCare.to_string(), "Personal Care");
    }

    #[test]
    fn test_product_serde_roundtrip() {
        let product = sample();
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
