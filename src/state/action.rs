// ============================================================================
// ACTIONS - Intenciones del usuario que viajan desde el DOM a la App
// ============================================================================
// Los nodos virtuales llevan la acción como dato; dom::patch la escribe en
// JSON en el atributo del nodo y dom::events la lee al hacer click.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Campo editable de un diálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogField {
    Reason,
    Date,
    Time,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // Reservas
    CancelBooking(i64),
    ConfirmBooking(i64),
    /// `amount` None: el precio no se conoce en el cliente
    PayBooking { booking_id: i64, amount: Option<f64> },
    SubmitReview(i64),
    BookService {
        service_id: i64,
        name: String,
        price: Option<f64>,
        provider_id: Option<i64>,
    },

    // Pagos
    ViewInvoice(i64),

    // Admin
    ApproveProvider(i64),
    RejectProvider(i64),

    // Dashboard proveedor
    RefreshEarnings,

    // Notificaciones
    DismissNotification(u64),
    MarkNotificationsRead,

    // Diálogos
    DialogInput { field: DialogField, value: String },
    DialogConfirm,
    DialogDismiss,
}

impl Action {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// None si el atributo no es una acción válida (marcado ajeno o viejo)
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

impl DialogField {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_survive_the_attribute() {
        let pay = Action::PayBooking { booking_id: 3, amount: None };
        let raw = pay.encode().unwrap();
        assert_eq!(Action::decode(&raw), Some(pay));

        let raw = DialogField::Time.encode().unwrap();
        assert_eq!(DialogField::decode(&raw), Some(DialogField::Time));
    }

    #[test]
    fn foreign_attribute_is_ignored() {
        assert_eq!(Action::decode("cancelBooking(3)"), None);
        assert_eq!(DialogField::decode(""), None);
    }
}
