//! User dashboard route handler.
//!
//! All data here is mock content until real accounts and order history
//! exist; the EcoCredit balance is a display value only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use ecofleet_core::OrderStatus;

use crate::filters;

/// Dashboard tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Orders,
    Impact,
    Settings,
}

impl DashboardTab {
    const ALL: [Self; 3] = [Self::Orders, Self::Impact, Self::Settings];

    const fn label(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Impact => "Impact",
            Self::Settings => "Settings",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Impact => "impact",
            Self::Settings => "settings",
        }
    }
}

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub tab: DashboardTab,
}

// =============================================================================
// Mock data
// =============================================================================

/// EcoRewards wallet display data.
#[derive(Clone)]
pub struct WalletView {
    pub balance: u32,
    pub earned: u32,
    pub spent: u32,
}

/// A past order in the history list.
#[derive(Clone)]
pub struct OrderView {
    pub id: String,
    pub items: Vec<String>,
    pub total: String,
    pub date: String,
    pub status: String,
    pub status_class: String,
    pub co2_saved_kg: String,
    pub packaging: String,
}

/// One row of EcoCredit history.
#[derive(Clone)]
pub struct CreditEntryView {
    pub earned: bool,
    pub amount: String,
    pub reason: String,
    pub date: String,
}

/// Lifetime impact stats.
#[derive(Clone)]
pub struct ImpactStatView {
    pub value: String,
    pub label: String,
}

fn get_wallet() -> WalletView {
    WalletView {
        balance: 1250,
        earned: 2400,
        spent: 1150,
    }
}

const fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "status-delivered",
        OrderStatus::InTransit => "status-transit",
        OrderStatus::Cancelled => "status-cancelled",
    }
}

fn order(
    id: &str,
    items: &[&str],
    total: &str,
    date: NaiveDate,
    status: OrderStatus,
    co2_saved_kg: &str,
    packaging: &str,
) -> OrderView {
    OrderView {
        id: id.to_string(),
        items: items.iter().map(ToString::to_string).collect(),
        total: total.to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        status: status.to_string(),
        status_class: status_class(status).to_string(),
        co2_saved_kg: co2_saved_kg.to_string(),
        packaging: packaging.to_string(),
    }
}

fn get_recent_orders() -> Vec<OrderView> {
    vec![
        order(
            "ECO-001",
            &["Bamboo Water Bottle", "Organic Cotton Tote"],
            "₹1,299",
            NaiveDate::from_ymd_opt(2025, 6, 18).unwrap_or_default(),
            OrderStatus::Delivered,
            "15.2",
            "Recyclable",
        ),
        order(
            "ECO-002",
            &["Solar Power Bank", "Eco-Friendly Phone Case"],
            "₹2,199",
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default(),
            OrderStatus::InTransit,
            "28.7",
            "Biodegradable",
        ),
        order(
            "ECO-003",
            &["Reusable Straw Set"],
            "₹299",
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap_or_default(),
            OrderStatus::Cancelled,
            "0",
            "Minimal",
        ),
    ]
}

fn get_credit_history() -> Vec<CreditEntryView> {
    vec![
        CreditEntryView {
            earned: true,
            amount: "+50".to_string(),
            reason: "Order ECO-001".to_string(),
            date: "2025-06-18".to_string(),
        },
        CreditEntryView {
            earned: false,
            amount: "-25".to_string(),
            reason: "Discount Applied".to_string(),
            date: "2025-06-15".to_string(),
        },
        CreditEntryView {
            earned: true,
            amount: "+100".to_string(),
            reason: "Referral Bonus".to_string(),
            date: "2025-06-12".to_string(),
        },
        CreditEntryView {
            earned: true,
            amount: "+75".to_string(),
            reason: "Order ECO-002".to_string(),
            date: "2025-06-10".to_string(),
        },
    ]
}

fn get_impact_stats() -> Vec<ImpactStatView> {
    let stat = |value: &str, label: &str| ImpactStatView {
        value: value.to_string(),
        label: label.to_string(),
    };
    vec![
        stat("24", "Total Orders"),
        stat("142.5 kg", "CO₂ Saved"),
        stat("12", "Trees Planted"),
        stat("450 L", "Water Saved"),
        stat("89 kWh", "Energy Saved"),
    ]
}

/// Tab strip entry.
#[derive(Clone)]
pub struct TabView {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub tabs: Vec<TabView>,
    pub show_orders: bool,
    pub show_impact: bool,
    pub show_settings: bool,
    pub wallet: WalletView,
    pub orders: Vec<OrderView>,
    pub credit_history: Vec<CreditEntryView>,
    pub impact_stats: Vec<ImpactStatView>,
}

/// Display the dashboard with the selected tab.
#[instrument]
pub async fn index(Query(query): Query<DashboardQuery>) -> impl IntoResponse {
    let tabs = DashboardTab::ALL
        .iter()
        .map(|tab| TabView {
            label: tab.label().to_string(),
            href: format!("/dashboard?tab={}", tab.slug()),
            active: *tab == query.tab,
        })
        .collect();

    DashboardTemplate {
        tabs,
        show_orders: query.tab == DashboardTab::Orders,
        show_impact: query.tab == DashboardTab::Impact,
        show_settings: query.tab == DashboardTab::Settings,
        wallet: get_wallet(),
        orders: get_recent_orders(),
        credit_history: get_credit_history(),
        impact_stats: get_impact_stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_orders() {
        let query: DashboardQuery = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(query.tab, DashboardTab::Orders);
    }

    #[test]
    fn test_tab_parses_from_slug() {
        let query: DashboardQuery =
            serde_json::from_str(r#"{"tab": "impact"}"#).expect("deserialize");
        assert_eq!(query.tab, DashboardTab::Impact);
    }

    #[test]
    fn test_mock_orders_cover_all_statuses() {
        let orders = get_recent_orders();
        let statuses: Vec<_> = orders.iter().map(|o| o.status.as_str()).collect();
        assert_eq!(statuses, ["Delivered", "In Transit", "Cancelled"]);
    }

    #[test]
    fn test_wallet_balances_reconcile() {
        let wallet = get_wallet();
        assert_eq!(wallet.balance, wallet.earned - wallet.spent);
    }
}
