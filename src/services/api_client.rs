// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO toca el DOM ni el estado, solo hace requests y parsea respuestas
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::config::CONFIG;
use crate::models::*;
use crate::services::error::{server_error, ApiError};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
        }
    }

    /// URL absoluta (o relativa al origen) de un endpoint `/api/...`
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    pub async fn get_user_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/api/user/bookings").await
    }

    pub async fn get_admin_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/api/admin/bookings").await
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Value, ApiError> {
        log::info!("📅 Creando reserva: servicio {} el {} a las {}",
            booking.service_id, booking.booking_date, booking.booking_time);
        self.post_json("/api/bookings", booking).await
    }

    pub async fn cancel_booking(&self, booking_id: i64, reason: &str) -> Result<Value, ApiError> {
        let path = format!("/api/bookings/{}/cancel", booking_id);
        let body = CancelRequest { reason: reason.to_string() };
        self.post_json(&path, &body).await
    }

    pub async fn confirm_booking(&self, booking_id: i64) -> Result<Value, ApiError> {
        self.post_empty(&format!("/api/bookings/{}/confirm", booking_id)).await
    }

    pub async fn check_availability(
        &self,
        provider_id: i64,
        date: &str,
        time: &str,
    ) -> Result<Availability, ApiError> {
        let url = self.url(&format!("/api/providers/{}/availability", provider_id));
        let response = Request::get(&url)
            .query([("date", date), ("time", time)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_payload(response).await
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    pub async fn get_pending_providers(&self) -> Result<Vec<PendingProvider>, ApiError> {
        self.get_json("/api/admin/providers/pending").await
    }

    pub async fn approve_provider(&self, provider_id: i64) -> Result<Value, ApiError> {
        self.post_empty(&format!("/api/admin/providers/{}/approve", provider_id)).await
    }

    pub async fn reject_provider(&self, provider_id: i64) -> Result<Value, ApiError> {
        self.post_empty(&format!("/api/admin/providers/{}/reject", provider_id)).await
    }

    pub async fn create_service(&self, service: &NewService) -> Result<Value, ApiError> {
        log::info!("🛠️ Creando servicio: {}", service.name);
        self.post_json("/api/admin/services", service).await
    }

    // ------------------------------------------------------------------
    // Services, payments, reviews
    // ------------------------------------------------------------------

    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json("/api/services").await
    }

    pub async fn get_user_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get_json("/api/user/payments").await
    }

    pub async fn process_payment(&self, payment: &PaymentRequest) -> Result<Value, ApiError> {
        log::info!("💳 Procesando pago de reserva {} ({:.2?})", payment.booking_id, payment.amount);
        self.post_json("/api/payments", payment).await
    }

    pub async fn submit_review(&self, review: &ReviewRequest) -> Result<ReviewSubmitted, ApiError> {
        self.post_json("/api/reviews", review).await
    }

    pub async fn get_provider_reviews(&self, provider_id: &str) -> Result<ProviderReviews, ApiError> {
        self.get_json(&format!("/api/provider/{}/reviews", provider_id)).await
    }

    // ------------------------------------------------------------------
    // Provider dashboard
    // ------------------------------------------------------------------

    pub async fn get_earnings_dashboard(&self) -> Result<ProviderEarnings, ApiError> {
        self.get_json("/api/provider/earnings/dashboard").await
    }

    pub async fn get_payment_history(&self) -> Result<PaymentHistory, ApiError> {
        self.get_json("/api/provider/earnings").await
    }

    // ------------------------------------------------------------------
    // Sesión y notificaciones
    // ------------------------------------------------------------------

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/user/profile").await
    }

    pub async fn get_notification_count(&self) -> Result<NotificationCount, ApiError> {
        self.get_json("/api/notifications/count").await
    }

    pub async fn mark_notifications_read(&self) -> Result<Value, ApiError> {
        self.post_empty("/api/notifications/mark-read").await
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_payload(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_payload(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_payload(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_payload<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_payload(status, &body)
}

/// Interpreta el cuerpo de una respuesta. El backend devuelve `{error}` tanto
/// con 200 como con 4xx/5xx, así que el payload manda sobre el status.
pub fn parse_payload<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if (200..300).contains(&status) => return Err(ApiError::Parse(e.to_string())),
        Err(_) => {
            return Err(ApiError::Http {
                status,
                body: body.chars().take(200).collect(),
            })
        }
    };

    if let Some(message) = server_error(&value) {
        return Err(ApiError::Server(message));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient { base_url: "https://portal.example".to_string() };
        assert_eq!(client.url("/api/services"), "https://portal.example/api/services");
        let relative = ApiClient { base_url: String::new() };
        assert_eq!(relative.url("/api/services"), "/api/services");
    }

    #[test]
    fn parses_list_payload() {
        let body = r#"[{"S_ID": 1, "Name": "Plumbing", "Price": 20}, {"S_ID": 2, "Name": "Cleaning", "Price": "15.5"}]"#;
        let services: Vec<Service> = parse_payload(200, body).unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[1].price, Some(15.5));
    }

    #[test]
    fn error_object_becomes_server_error_regardless_of_status() {
        let r: Result<Vec<Service>, _> = parse_payload(200, r#"{"error": "X"}"#);
        assert_eq!(r.unwrap_err(), ApiError::Server("X".to_string()));
        let r: Result<Vec<Service>, _> = parse_payload(401, r#"{"error": "Unauthorized"}"#);
        assert_eq!(r.unwrap_err(), ApiError::Server("Unauthorized".to_string()));
    }

    #[test]
    fn non_json_bodies() {
        let r: Result<Value, _> = parse_payload(500, "<html>Internal Server Error</html>");
        assert!(matches!(r, Err(ApiError::Http { status: 500, .. })));
        let r: Result<Value, _> = parse_payload(200, "not json");
        assert!(matches!(r, Err(ApiError::Parse(_))));
    }

    #[test]
    fn object_where_list_expected_is_parse_error() {
        let r: Result<Vec<Payment>, _> = parse_payload(200, r#"{"message": "hello"}"#);
        assert!(matches!(r, Err(ApiError::Parse(_))));
    }
}
