//! Eco-score classification via an external text-generation service.
//!
//! A single best-effort remote call per product: the classifier sends a
//! fixed prompt embedding the product name and description and expects a
//! small JSON object back. Any failure substitutes a static fallback score.

pub mod client;
pub mod error;
pub mod types;

pub use client::EcoScoreClient;
pub use error::EcoScoreError;
pub use types::EcoScoreResult;
