use serde::{Deserialize, Serialize};
use crate::models::lenient;

/// Reserva tal como la devuelven /api/user/bookings y /api/admin/bookings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "B_ID", default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "S_ID", default, deserialize_with = "lenient::opt_i64")]
    pub service_id: Option<i64>,
    #[serde(rename = "ProviderID", default, deserialize_with = "lenient::opt_i64")]
    pub provider_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub customer_name: Option<String>,
    #[serde(rename = "BookingDate", default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
    #[serde(rename = "BookingTime", default, deserialize_with = "lenient::opt_string")]
    pub time: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(rename = "PaymentStatus", default, deserialize_with = "lenient::opt_string")]
    pub payment_status: Option<String>,
    #[serde(rename = "Price", default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub payment_made: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub is_cancelled: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Unknown,
}

impl BookingStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("pending") => BookingStatus::Pending,
            Some("confirmed") => BookingStatus::Confirmed,
            Some("completed") => BookingStatus::Completed,
            Some("cancelled") | Some("canceled") => BookingStatus::Cancelled,
            _ => BookingStatus::Unknown,
        }
    }

    /// Clase de badge Bootstrap
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "warning",
            BookingStatus::Confirmed => "primary",
            BookingStatus::Completed => "success",
            BookingStatus::Cancelled => "danger",
            BookingStatus::Unknown => "secondary",
        }
    }
}

impl Booking {
    pub fn status(&self) -> BookingStatus {
        if self.is_cancelled.unwrap_or(0) > 0 {
            return BookingStatus::Cancelled;
        }
        BookingStatus::parse(self.status.as_deref())
    }

    pub fn is_paid(&self) -> bool {
        self.payment_made.unwrap_or(0) > 0
            || self
                .payment_status
                .as_deref()
                .map(|s| s.eq_ignore_ascii_case("paid"))
                .unwrap_or(false)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self.status(), BookingStatus::Pending | BookingStatus::Confirmed)
    }

    pub fn can_pay(&self) -> bool {
        !self.is_paid() && self.status() == BookingStatus::Pending
    }

    pub fn can_review(&self) -> bool {
        self.is_paid() && matches!(self.status(), BookingStatus::Confirmed | BookingStatus::Completed)
    }

    pub fn can_confirm(&self) -> bool {
        self.status() == BookingStatus::Pending
    }
}

/// Cuerpo de POST /api/bookings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub service_id: i64,
    pub booking_date: String,
    pub booking_time: String,
}

/// Cuerpo de POST /api/bookings/{id}/cancel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_row() {
        let json = r#"{
            "B_ID": 7, "S_ID": 3, "service_name": "Plumbing",
            "BookingDate": "2024-05-01", "BookingTime": "14:30",
            "Status": "Pending", "PaymentStatus": "Not Paid",
            "payment_made": 0, "is_cancelled": 0
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, Some(7));
        assert_eq!(booking.status(), BookingStatus::Pending);
        assert!(booking.can_pay());
        assert!(booking.can_cancel());
        assert!(!booking.can_review());
    }

    #[test]
    fn cancellation_count_wins_over_status_text() {
        let booking = Booking {
            status: Some("Confirmed".to_string()),
            is_cancelled: Some(1),
            ..Booking::default()
        };
        assert_eq!(booking.status(), BookingStatus::Cancelled);
        assert!(!booking.can_cancel());
    }

    #[test]
    fn paid_confirmed_booking_can_be_reviewed() {
        let booking = Booking {
            status: Some("Confirmed".to_string()),
            payment_status: Some("Paid".to_string()),
            ..Booking::default()
        };
        assert!(booking.can_review());
        assert!(!booking.can_pay());
    }
}
