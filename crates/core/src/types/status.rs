//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order delivery status, as shown in the dashboard order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    #[serde(rename = "In Transit")]
    InTransit,
    Cancelled,
}

impl OrderStatus {
    /// The display string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::InTransit => "In Transit",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&OrderStatus::InTransit).expect("serialize");
        assert_eq!(json, "\"In Transit\"");
    }
}
