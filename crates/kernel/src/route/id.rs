//! Built-in route identifiers.
//!
//! These strings are the application's navigation vocabulary: every screen
//! change elsewhere in the app passes one of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RouteError;

/// Identifier of a route in the built-in registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteId {
    Dashboard,
    Orders,
    NewOrder,
    LogisticsSetup,
    LogisticsProviders,
    LogisticsPayment,
    OrderComplete,
    Inventory,
    AddItem,
    Payments,
    Logistics,
    CreateShipment,
    Notifications,
    Settings,
    AiAssistant,
    ReceiptTemplates,
    BusinessProfile,
}

impl RouteId {
    /// All identifiers, in registry order.
    pub const ALL: [RouteId; 17] = [
        RouteId::Dashboard,
        RouteId::Orders,
        RouteId::NewOrder,
        RouteId::LogisticsSetup,
        RouteId::LogisticsProviders,
        RouteId::LogisticsPayment,
        RouteId::OrderComplete,
        RouteId::Inventory,
        RouteId::AddItem,
        RouteId::Payments,
        RouteId::Logistics,
        RouteId::CreateShipment,
        RouteId::Notifications,
        RouteId::Settings,
        RouteId::AiAssistant,
        RouteId::ReceiptTemplates,
        RouteId::BusinessProfile,
    ];

    /// The identifier's string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "orders",
            Self::NewOrder => "new-order",
            Self::LogisticsSetup => "logistics-setup",
            Self::LogisticsProviders => "logistics-providers",
            Self::LogisticsPayment => "logistics-payment",
            Self::OrderComplete => "order-complete",
            Self::Inventory => "inventory",
            Self::AddItem => "add-item",
            Self::Payments => "payments",
            Self::Logistics => "logistics",
            Self::CreateShipment => "create-shipment",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
            Self::AiAssistant => "ai-assistant",
            Self::ReceiptTemplates => "receipt-templates",
            Self::BusinessProfile => "business-profile",
        }
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<RouteId> for String {
    fn from(id: RouteId) -> Self {
        id.as_str().to_string()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteId {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RouteError::unknown_route(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_identifier() {
        for id in RouteId::ALL {
            assert_eq!(id.as_str().parse::<RouteId>().unwrap(), id);
        }
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "not-a-route".parse::<RouteId>().unwrap_err();
        assert_eq!(err, RouteError::unknown_route("not-a-route"));
    }

    #[test]
    fn serde_matches_as_str() {
        for id in RouteId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }
}
