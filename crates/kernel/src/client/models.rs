//! Request and response bodies exchanged with the backend.
//!
//! Field names follow the backend's camelCase JSON. Business records
//! (orders, products, shipments) are passed through as raw JSON.

use serde::{Deserialize, Serialize};

/// Credentials for `/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New account details for `/auth/signup`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Session issued by login and signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Order fulfilment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Processing,
    ReadyToShip,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "PROCESSING",
            Self::ReadyToShip => "READY_TO_SHIP",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// How much of an order has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPaymentStatus {
    Pending,
    Partial,
    Paid,
    Refunded,
}

impl OrderPaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Partial => "PARTIAL",
            Self::Paid => "PAID",
            Self::Refunded => "REFUNDED",
        }
    }
}

/// State of a recorded payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }
}

/// Shipment delivery state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    Preparing,
    InTransit,
    Delivered,
    Delayed,
    Cancelled,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparing => "PREPARING",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Body of `/stripe/create-payment-intent`.
///
/// `amount` is in major units, as the backend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Response of `/stripe/create-payment-intent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
}

/// A payment intent as reported after confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl PaymentIntent {
    pub fn succeeded(&self) -> bool {
        self.status.eq_ignore_ascii_case("succeeded")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_from_backend_json() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{"accessToken": "t0k", "userId": 7, "email": "a@b.ng", "fullName": "Ada Obi"}"#,
        )
        .unwrap();

        assert_eq!(auth.access_token, "t0k");
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.user_id, Some(7));
    }

    #[test]
    fn status_strings_match_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::ReadyToShip).unwrap(),
            format!("\"{}\"", OrderStatus::ReadyToShip.as_str())
        );
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::InTransit).unwrap(),
            "\"IN_TRANSIT\""
        );
    }

    #[test]
    fn payment_intent_request_omits_absent_fields() {
        let request = PaymentIntentRequest {
            amount: 5075.0,
            currency: "ngn".into(),
            description: None,
            order_id: Some(12),
            shipment_id: None,
            customer_email: None,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["orderId"], 12);
        assert!(json.get("shipmentId").is_none());
        assert!(json.get("description").is_none());
    }
}
