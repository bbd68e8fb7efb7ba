//! Core types for EcoFleet Nexus.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod score;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{Category, PackagingType, Product};
pub use score::EcoScore;
pub use status::OrderStatus;
