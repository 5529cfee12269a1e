//! The application's built-in route table.

use super::{Route, RouteError, RouteId, RouteRegistry};

fn route(id: RouteId, path: &str, name: &str, description: &str) -> Route {
    Route::new(id.as_str(), path, name)
        .with_description(description)
        .with_auth()
}

/// All built-in routes, in registration order.
///
/// The order flow is a chain: orders → new order → logistics setup →
/// provider choice → logistics payment → order complete.
pub fn builtin_routes() -> Vec<Route> {
    vec![
        route(RouteId::Dashboard, "/", "Dashboard", "Overview of your business metrics")
            .with_icon("layout-dashboard")
            .in_navigation(),
        route(RouteId::Orders, "/orders", "Orders", "Manage customer orders")
            .with_icon("shopping-cart")
            .in_navigation(),
        route(RouteId::NewOrder, "/orders/new", "New Order", "Create a new customer order")
            .with_parent(RouteId::Orders),
        route(
            RouteId::LogisticsSetup,
            "/orders/logistics/setup",
            "Logistics Setup",
            "Configure shipping details",
        )
        .with_parent(RouteId::NewOrder),
        route(
            RouteId::LogisticsProviders,
            "/orders/logistics/providers",
            "Choose Provider",
            "Select logistics provider",
        )
        .with_parent(RouteId::LogisticsSetup),
        route(
            RouteId::LogisticsPayment,
            "/orders/logistics/payment",
            "Payment",
            "Pay for logistics service",
        )
        .with_parent(RouteId::LogisticsProviders),
        route(
            RouteId::OrderComplete,
            "/orders/complete",
            "Order Complete",
            "Order completion confirmation",
        )
        .with_parent(RouteId::LogisticsPayment),
        route(RouteId::Inventory, "/inventory", "Inventory", "Manage product inventory")
            .with_icon("package-2")
            .in_navigation(),
        route(RouteId::AddItem, "/inventory/add", "Add Item", "Add new inventory item")
            .with_parent(RouteId::Inventory),
        route(RouteId::Payments, "/payments", "Payments", "Track payment transactions")
            .with_icon("credit-card")
            .in_navigation(),
        route(RouteId::Logistics, "/logistics", "Logistics", "Manage shipments and deliveries")
            .with_icon("truck")
            .in_navigation(),
        route(
            RouteId::CreateShipment,
            "/logistics/create-shipment",
            "Create Shipment",
            "Create a new shipment",
        )
        .with_parent(RouteId::Logistics),
        route(
            RouteId::Notifications,
            "/notifications",
            "Notifications",
            "View notification messages",
        )
        .with_icon("bell")
        .in_navigation(),
        route(RouteId::Settings, "/settings", "Settings", "Application settings")
            .with_icon("settings"),
        route(
            RouteId::AiAssistant,
            "/ai-assistant",
            "AI Assistant",
            "Business intelligence assistant",
        )
        .with_icon("bot"),
        route(
            RouteId::ReceiptTemplates,
            "/receipt-templates",
            "Receipt Templates",
            "Customize receipt templates",
        )
        .with_icon("file-text"),
        route(
            RouteId::BusinessProfile,
            "/profile",
            "Business Profile",
            "Manage business and personal information",
        )
        .with_icon("user"),
    ]
}

impl RouteRegistry {
    /// Build the registry from the built-in route table.
    pub fn builtin() -> Result<Self, RouteError> {
        Self::from_routes(builtin_routes())
    }
}
