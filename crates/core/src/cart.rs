//! Shopping cart state.
//!
//! A [`Cart`] is treated as a value: every mutating operation consumes the
//! cart and returns the new snapshot, so callers never observe a cart in a
//! half-updated state. Invariants held by construction:
//!
//! - every line has quantity >= 1 (a decrement to zero or below removes the
//!   line entirely)
//! - at most one line per product id
//! - line order follows insertion order

use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, Product, ProductId};

/// One row in the shopping cart: a product and its requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,
    /// Requested quantity; always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price x quantity), exact.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of the given product, if a line for it exists.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product.id == id)
            .map(|line| line.quantity)
    }

    /// Add one unit of `product`.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// by 1; otherwise a new line with quantity 1 is appended.
    #[must_use]
    pub fn add(mut self, product: &Product) -> Self {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
        self
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// A quantity of zero or below behaves as [`Cart::remove`]. If no line
    /// for `id` exists the cart is returned unchanged.
    #[must_use]
    pub fn set_quantity(mut self, id: ProductId, quantity: i64) -> Self {
        if quantity <= 0 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity = quantity;
        }
        self
    }

    /// Drop the line for `id` if present; no-op otherwise.
    #[must_use]
    pub fn remove(mut self, id: ProductId) -> Self {
        self.lines.retain(|line| line.product.id != id);
        self
    }

    /// An empty cart, discarding all lines.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of (unit price x quantity) across all lines, exact.
    ///
    /// Two-decimal currency rounding happens at the point of display only,
    /// never in this accumulator.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |line| {
                line.product.price.currency_code
            });
        self.lines
            .iter()
            .fold(Price::zero(currency), |total, line| {
                total + line.line_price()
            })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{Category, EcoScore, PackagingType};

    fn product(id: i32, name: &str, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Price::new(Decimal::from(rupees), CurrencyCode::INR),
            image_url: format!("https://example.com/{id}.jpg"),
            eco_score: EcoScore::A,
            co2_footprint: "1.0 kg CO₂e".to_string(),
            packaging: PackagingType::Standard,
            category: Category::Lifestyle,
        }
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let tshirt = product(1, "Organic Cotton T-Shirt", 299);
        let cart = Cart::new().add(&tshirt).add(&tshirt);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(tshirt.id), Some(2));
        assert_eq!(cart.total_price().amount, Decimal::from(598));
    }

    #[test]
    fn test_add_distinct_products_preserves_order() {
        let tshirt = product(1, "Organic Cotton T-Shirt", 299);
        let bank = product(4, "Solar Power Bank", 799);
        let cart = Cart::new().add(&tshirt).add(&bank);

        let names: Vec<_> = cart.lines().iter().map(|l| l.product.name.as_str()).collect();
        assert_eq!(names, ["Organic Cotton T-Shirt", "Solar Power Bank"]);
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let cart = Cart::new()
            .add(&product(1, "Organic Cotton T-Shirt", 299))
            .add(&product(4, "Solar Power Bank", 799))
            .clear();

        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price().amount, Decimal::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_replaces() {
        let soap = product(5, "Biodegradable Soap Bar", 89);
        let cart = Cart::new().add(&soap).set_quantity(soap.id, 4);

        assert_eq!(cart.quantity_of(soap.id), Some(4));
        assert_eq!(cart.total_item_count(), 4);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let soap = product(5, "Biodegradable Soap Bar", 89);
        let base = Cart::new().add(&soap);

        let via_set = base.clone().set_quantity(soap.id, 0);
        let via_remove = base.remove(soap.id);
        assert_eq!(via_set, via_remove);
        assert!(via_set.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_equals_remove() {
        let soap = product(5, "Biodegradable Soap Bar", 89);
        let cart = Cart::new().add(&soap).set_quantity(soap.id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let soap = product(5, "Biodegradable Soap Bar", 89);
        let before = Cart::new().add(&soap);
        let after = before.clone().set_quantity(ProductId::new(99), 7);
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let soap = product(5, "Biodegradable Soap Bar", 89);
        let before = Cart::new().add(&soap);
        let after = before.clone().remove(ProductId::new(99));
        assert_eq!(after, before);
    }

    #[test]
    fn test_total_price_accumulates_exactly() {
        // 89.99 * 3 + 299.50 = 569.47, exact in decimal arithmetic.
        let mut soap = product(5, "Biodegradable Soap Bar", 0);
        soap.price = Price::from_minor_units(8999, CurrencyCode::INR);
        let mut tshirt = product(1, "Organic Cotton T-Shirt", 0);
        tshirt.price = Price::from_minor_units(29950, CurrencyCode::INR);

        let cart = Cart::new()
            .add(&soap)
            .set_quantity(soap.id, 3)
            .add(&tshirt);
        assert_eq!(cart.total_price().amount, Decimal::new(56947, 2));
        assert_eq!(cart.total_price().display(), "₹569.47");
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let cart = Cart::new()
            .add(&product(1, "Organic Cotton T-Shirt", 299))
            .add(&product(4, "Solar Power Bank", 799));
        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }

    #[test]
    fn test_unreadable_snapshot_is_an_error_not_a_panic() {
        assert!(serde_json::from_str::<Cart>("{\"lines\": 12}").is_err());
    }
}
