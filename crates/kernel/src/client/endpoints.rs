//! Typed wrappers for each backend endpoint.
//!
//! Business records are returned as raw JSON; screens pick the fields they
//! render.

use serde_json::Value;
use urlencoding::encode;

use super::models::{
    AuthResponse, LoginRequest, OrderPaymentStatus, OrderStatus, PaymentIntentRequest,
    PaymentIntentResponse, PaymentStatus, ShipmentStatus, SignupRequest,
};
use super::{ApiClient, ApiError};

type ApiResult<T> = Result<T, ApiError>;

impl ApiClient {
    // Auth

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.post("/auth/login", Some(&body)).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthResponse> {
        let body = serde_json::to_value(request)?;
        self.post("/auth/signup", Some(&body)).await
    }

    pub async fn verify_email(&self, token: &str) -> ApiResult<Value> {
        self.post(&format!("/auth/verify-email?token={}", encode(token)), None)
            .await
    }

    pub async fn resend_verification(&self, email: &str) -> ApiResult<Value> {
        self.post(
            &format!("/auth/resend-verification?email={}", encode(email)),
            None,
        )
        .await
    }

    // Users

    pub async fn current_user(&self) -> ApiResult<Value> {
        self.get("/users/me").await
    }

    pub async fn update_profile(&self, profile: &Value) -> ApiResult<Value> {
        self.put("/users/profile", Some(profile)).await
    }

    // Business

    pub async fn create_business(&self, business: &Value) -> ApiResult<Value> {
        self.post("/business", Some(business)).await
    }

    pub async fn update_business(&self, business_id: i64, business: &Value) -> ApiResult<Value> {
        self.put(&format!("/business/{business_id}"), Some(business))
            .await
    }

    pub async fn current_business(&self) -> ApiResult<Value> {
        self.get("/business/current").await
    }

    pub async fn dashboard_stats(&self) -> ApiResult<Value> {
        self.get("/dashboard/stats").await
    }

    // Products

    pub async fn products(&self) -> ApiResult<Value> {
        self.get("/products").await
    }

    pub async fn create_product(&self, product: &Value) -> ApiResult<Value> {
        self.post("/products", Some(product)).await
    }

    pub async fn update_product(&self, product_id: i64, product: &Value) -> ApiResult<Value> {
        self.put(&format!("/products/{product_id}"), Some(product))
            .await
    }

    pub async fn delete_product(&self, product_id: i64) -> ApiResult<Value> {
        self.delete(&format!("/products/{product_id}")).await
    }

    pub async fn low_stock_products(&self) -> ApiResult<Value> {
        self.get("/products/low-stock").await
    }

    pub async fn search_products(&self, query: &str) -> ApiResult<Value> {
        self.get(&format!("/products/search?query={}", encode(query)))
            .await
    }

    // Orders

    pub async fn orders(&self) -> ApiResult<Value> {
        self.get("/orders").await
    }

    pub async fn create_order(&self, order: &Value) -> ApiResult<Value> {
        self.post("/orders", Some(order)).await
    }

    pub async fn order(&self, order_id: i64) -> ApiResult<Value> {
        self.get(&format!("/orders/{order_id}")).await
    }

    pub async fn order_by_number(&self, order_number: &str) -> ApiResult<Value> {
        self.get(&format!("/orders/number/{}", encode(order_number)))
            .await
    }

    pub async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ApiResult<Value> {
        self.put(
            &format!("/orders/{order_id}/status?status={}", status.as_str()),
            None,
        )
        .await
    }

    pub async fn update_order_payment_status(
        &self,
        order_id: i64,
        status: OrderPaymentStatus,
    ) -> ApiResult<Value> {
        self.put(
            &format!("/orders/{order_id}/payment-status?status={}", status.as_str()),
            None,
        )
        .await
    }

    pub async fn cancel_order(&self, order_id: i64) -> ApiResult<Value> {
        self.post(&format!("/orders/{order_id}/cancel"), None).await
    }

    pub async fn orders_by_status(&self, status: OrderStatus) -> ApiResult<Value> {
        self.get(&format!("/orders/status/{}", status.as_str()))
            .await
    }

    // Payments

    pub async fn payments(&self) -> ApiResult<Value> {
        self.get("/payments").await
    }

    pub async fn process_payment(&self, payment: &Value) -> ApiResult<Value> {
        self.post("/payments", Some(payment)).await
    }

    pub async fn payment(&self, payment_id: i64) -> ApiResult<Value> {
        self.get(&format!("/payments/{payment_id}")).await
    }

    pub async fn payments_by_order(&self, order_id: i64) -> ApiResult<Value> {
        self.get(&format!("/payments/order/{order_id}")).await
    }

    pub async fn update_payment_status(
        &self,
        payment_id: i64,
        status: PaymentStatus,
    ) -> ApiResult<Value> {
        self.put(
            &format!("/payments/{payment_id}/status?status={}", status.as_str()),
            None,
        )
        .await
    }

    // Shipments

    pub async fn shipments(&self) -> ApiResult<Value> {
        self.get("/shipments").await
    }

    pub async fn create_shipment(&self, shipment: &Value) -> ApiResult<Value> {
        self.post("/shipments", Some(shipment)).await
    }

    pub async fn shipment(&self, shipment_id: i64) -> ApiResult<Value> {
        self.get(&format!("/shipments/{shipment_id}")).await
    }

    pub async fn shipment_by_tracking(&self, tracking_number: &str) -> ApiResult<Value> {
        self.get(&format!("/shipments/tracking/{}", encode(tracking_number)))
            .await
    }

    pub async fn update_shipment_status(
        &self,
        shipment_id: i64,
        status: ShipmentStatus,
    ) -> ApiResult<Value> {
        self.put(
            &format!("/shipments/{shipment_id}/status?status={}", status.as_str()),
            None,
        )
        .await
    }

    pub async fn shipments_by_status(&self, status: ShipmentStatus) -> ApiResult<Value> {
        self.get(&format!("/shipments/status/{}", status.as_str()))
            .await
    }

    // Notifications

    pub async fn notifications(&self) -> ApiResult<Value> {
        self.get("/notifications").await
    }

    pub async fn mark_notification_read(&self, notification_id: i64) -> ApiResult<Value> {
        self.put(&format!("/notifications/{notification_id}/read"), None)
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> ApiResult<Value> {
        self.put("/notifications/mark-all-read", None).await
    }

    pub async fn delete_notification(&self, notification_id: i64) -> ApiResult<Value> {
        self.delete(&format!("/notifications/{notification_id}"))
            .await
    }

    // Payment intents

    pub async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> ApiResult<PaymentIntentResponse> {
        let body = serde_json::to_value(request)?;
        self.post("/stripe/create-payment-intent", Some(&body)).await
    }

    pub async fn confirm_payment_intent(
        &self,
        payment_intent_id: &str,
        payment_method: Option<&Value>,
    ) -> ApiResult<Value> {
        self.post(
            &format!(
                "/stripe/confirm-payment?paymentIntentId={}",
                encode(payment_intent_id)
            ),
            payment_method,
        )
        .await
    }
}
