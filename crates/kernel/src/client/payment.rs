//! Payment processing through the backend's payment-intent endpoints.
//!
//! The processor itself is a black box: create an intent, receive a client
//! secret, confirm it with a payment method.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use super::models::{PaymentIntent, PaymentIntentRequest};
use super::{ApiClient, ApiError};
use crate::pricing::DEFAULT_CURRENCY;

/// A payment processor client.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a payment intent and return its client secret.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<String, ApiError>;

    /// Confirm a payment intent with an optional payment method descriptor.
    async fn confirm_payment(
        &self,
        client_secret: &str,
        payment_method: Option<&Value>,
    ) -> Result<PaymentIntent, ApiError>;
}

/// [`PaymentProcessor`] backed by the Orderlee API.
#[derive(Debug, Clone)]
pub struct ApiPaymentProcessor {
    client: ApiClient,
}

impl ApiPaymentProcessor {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Intent id embedded in a client secret (`pi_123_secret_abc` → `pi_123`).
pub fn intent_id_from_secret(client_secret: &str) -> &str {
    client_secret
        .split_once("_secret_")
        .map_or(client_secret, |(id, _)| id)
}

#[async_trait]
impl PaymentProcessor for ApiPaymentProcessor {
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<String, ApiError> {
        let response = self.client.create_payment_intent(request).await?;
        Ok(response.client_secret)
    }

    async fn confirm_payment(
        &self,
        client_secret: &str,
        payment_method: Option<&Value>,
    ) -> Result<PaymentIntent, ApiError> {
        let intent_id = intent_id_from_secret(client_secret);
        let response = self
            .client
            .confirm_payment_intent(intent_id, payment_method)
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

/// Result of a logistics payment.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Succeeded {
        intent: PaymentIntent,
        client_secret: String,
    },
    Failed {
        reason: String,
    },
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Pay for a shipment booked for an order.
///
/// `amount` is in minor units. Never fails: every error is reported as
/// [`PaymentOutcome::Failed`] so the payment screen can show it.
pub async fn process_logistics_payment(
    processor: &dyn PaymentProcessor,
    amount: i64,
    order_id: i64,
    shipment_id: i64,
    payment_method: Option<&Value>,
    customer_email: Option<&str>,
) -> PaymentOutcome {
    let request = PaymentIntentRequest {
        amount: amount as f64 / 100.0,
        currency: DEFAULT_CURRENCY.to_string(),
        description: Some(format!("Logistics payment for order {order_id}")),
        order_id: Some(order_id),
        shipment_id: Some(shipment_id),
        customer_email: customer_email.map(str::to_string),
    };

    let client_secret = match processor.create_payment_intent(&request).await {
        Ok(secret) => secret,
        Err(e) => {
            warn!(order_id, error = %e, "failed to create payment intent");
            return PaymentOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    match processor.confirm_payment(&client_secret, payment_method).await {
        Ok(intent) if intent.succeeded() => {
            info!(order_id, shipment_id, intent = %intent.id, "logistics payment succeeded");
            PaymentOutcome::Succeeded {
                intent,
                client_secret,
            }
        }
        Ok(intent) => {
            warn!(order_id, intent = %intent.id, status = %intent.status, "payment not completed");
            PaymentOutcome::Failed {
                reason: format!("payment {} is {}", intent.id, intent.status),
            }
        }
        Err(e) => {
            warn!(order_id, error = %e, "failed to confirm payment");
            PaymentOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    struct FakeProcessor {
        create: Result<String, u16>,
        status: &'static str,
        seen: Mutex<Vec<PaymentIntentRequest>>,
    }

    impl FakeProcessor {
        fn new(create: Result<String, u16>, status: &'static str) -> Self {
            Self {
                create,
                status,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PaymentProcessor for FakeProcessor {
        async fn create_payment_intent(
            &self,
            request: &PaymentIntentRequest,
        ) -> Result<String, ApiError> {
            self.seen.lock().push(request.clone());
            self.create.clone().map_err(|status| ApiError::Http {
                status,
                message: "card declined".into(),
            })
        }

        async fn confirm_payment(
            &self,
            client_secret: &str,
            _payment_method: Option<&Value>,
        ) -> Result<PaymentIntent, ApiError> {
            Ok(PaymentIntent {
                id: intent_id_from_secret(client_secret).to_string(),
                status: self.status.to_string(),
                amount: None,
            })
        }
    }

    #[test]
    fn intent_id_parsing() {
        assert_eq!(intent_id_from_secret("pi_123_secret_abc"), "pi_123");
        assert_eq!(intent_id_from_secret("pi_plain"), "pi_plain");
    }

    #[tokio::test]
    async fn successful_payment() {
        let processor = FakeProcessor::new(Ok("pi_9_secret_x".into()), "succeeded");

        let outcome =
            process_logistics_payment(&processor, 507_500, 42, 7, None, Some("a@b.ng")).await;

        assert!(outcome.is_success());
        let seen = processor.seen.lock();
        assert_eq!(seen[0].amount, 5075.0);
        assert_eq!(seen[0].currency, "ngn");
        assert_eq!(
            seen[0].description.as_deref(),
            Some("Logistics payment for order 42")
        );
        assert_eq!(seen[0].shipment_id, Some(7));
    }

    #[tokio::test]
    async fn create_failure_becomes_outcome() {
        let processor = FakeProcessor::new(Err(402), "succeeded");

        let outcome = process_logistics_payment(&processor, 100, 1, 1, None, None).await;

        assert_eq!(
            outcome,
            PaymentOutcome::Failed {
                reason: "card declined".into()
            }
        );
    }

    #[tokio::test]
    async fn unconfirmed_intent_is_failure() {
        let processor = FakeProcessor::new(Ok("pi_5_secret_y".into()), "requires_action");

        let outcome = process_logistics_payment(&processor, 100, 1, 1, None, None).await;

        assert_eq!(
            outcome,
            PaymentOutcome::Failed {
                reason: "payment pi_5 is requires_action".into()
            }
        );
    }
}
