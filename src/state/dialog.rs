// ============================================================================
// DIALOG STATE - Diálogos no bloqueantes (sustituyen prompt/confirm)
// ============================================================================

use crate::state::action::DialogField;

pub const DEFAULT_CANCEL_REASON: &str = "Schedule conflict";
pub const DEFAULT_BOOKING_TIME: &str = "10:00";

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    CancelBooking {
        booking_id: i64,
        reason: String,
    },
    BookService {
        service_id: i64,
        service_name: String,
        price: Option<f64>,
        provider_id: Option<i64>,
        date: String,
        time: String,
    },
    RejectProvider {
        provider_id: i64,
    },
}

impl Dialog {
    pub fn cancel_booking(booking_id: i64) -> Self {
        Dialog::CancelBooking {
            booking_id,
            reason: DEFAULT_CANCEL_REASON.to_string(),
        }
    }

    pub fn book_service(
        service_id: i64,
        service_name: &str,
        price: Option<f64>,
        provider_id: Option<i64>,
        default_date: String,
    ) -> Self {
        Dialog::BookService {
            service_id,
            service_name: service_name.to_string(),
            price,
            provider_id,
            date: default_date,
            time: DEFAULT_BOOKING_TIME.to_string(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Dialog::CancelBooking { .. } => "Cancel booking".to_string(),
            Dialog::BookService { service_name, .. } => format!("Book {}", service_name),
            Dialog::RejectProvider { .. } => "Reject service provider".to_string(),
        }
    }

    /// Actualiza un campo; ignora campos que el diálogo no tiene
    pub fn set_field(&mut self, field: DialogField, value: String) {
        match (self, field) {
            (Dialog::CancelBooking { reason, .. }, DialogField::Reason) => *reason = value,
            (Dialog::BookService { date, .. }, DialogField::Date) => *date = value,
            (Dialog::BookService { time, .. }, DialogField::Time) => *time = value,
            _ => {}
        }
    }
}
