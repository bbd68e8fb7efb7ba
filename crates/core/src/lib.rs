//! EcoFleet Core - Shared types and state model.
//!
//! This crate provides the domain types and the three client-local state
//! holders used by the EcoFleet Nexus storefront:
//!
//! - [`cart`] - Shopping cart as a value: add, set-quantity, remove, clear,
//!   derived totals
//! - [`filter`] - Catalog filter criteria and the pure visibility predicate
//! - [`checkout`] - The checkout flow state machine
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients, no async. Each state holder is owned by whichever page
//! composition created it; nothing here shares mutable state.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, and the closed product attribute sets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod filter;
pub mod types;

pub use cart::{Cart, CartLine};
pub use checkout::{Checkout, CheckoutSelection, CheckoutState, PaymentMethod, ValidationError};
pub use filter::FilterCriteria;
pub use types::*;
