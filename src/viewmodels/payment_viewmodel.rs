// ============================================================================
// PAYMENT VIEWMODEL - Pagos del cliente
// ============================================================================

use crate::models::{Payment, PaymentRequest};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::notifications::NotificationKind;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{
    DEFAULT_PAYMENT_METHOD, MSG_LOAD_PAYMENTS_FAILED, MSG_PAYMENT_FAILED, PAYMENTS_TABLE_BODY,
    USER_BOOKINGS,
};
use crate::viewmodels::booking_viewmodel::BookingViewModel;
use crate::views;

#[derive(Clone)]
pub struct PaymentViewModel {
    api: ApiClient,
    state: AppState,
}

impl PaymentViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    pub async fn load_user_payments(&self) {
        let ticket = self.state.begin_request(Loader::UserPayments);
        log::info!("💳 [PAYMENTS] Cargando pagos...");
        let result = self.api.get_user_payments().await;
        self.apply_user_payments(ticket, result);
    }

    pub fn apply_user_payments(&self, ticket: RequestTicket, result: Result<Vec<Payment>, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(payments) => {
                log::info!("✅ [PAYMENTS] {} pagos recibidos", payments.len());
                self.state
                    .page
                    .commit(PAYMENTS_TABLE_BODY, views::render_user_payments(&payments));
            }
            Err(e) => self.state.report_error("PAYMENTS", &e, MSG_LOAD_PAYMENTS_FAILED),
        }
    }

    /// Paga una reserva con el método por defecto y recarga reservas y pagos
    pub async fn process_payment(&self, booking_id: i64, amount: Option<f64>) {
        log::info!("💳 [PAYMENTS] Pagando reserva {} ({:?})", booking_id, amount);
        let request = PaymentRequest {
            booking_id,
            amount,
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
        };
        let result = self.api.process_payment(&request).await;
        let done = self.state.finish_mutation(
            "PAYMENTS",
            result,
            "Payment processed successfully!",
            MSG_PAYMENT_FAILED,
        );
        if done.is_none() {
            return;
        }
        if self.state.page.has_region(USER_BOOKINGS) {
            BookingViewModel::new(self.api.clone(), self.state.clone())
                .load_user_bookings()
                .await;
        }
        if self.state.page.has_region(PAYMENTS_TABLE_BODY) {
            self.load_user_payments().await;
        }
    }

    pub fn view_invoice(&self, invoice_id: i64) {
        self.state
            .notify(&format!("Viewing invoice #{}", invoice_id), NotificationKind::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::parse_payload;
    use crate::state::app_state::testing::{notices, state_with};

    fn setup() -> (PaymentViewModel, std::rc::Rc<crate::dom::renderer::testing::MemoryRenderer>) {
        let (state, renderer, _clock) = state_with(&[PAYMENTS_TABLE_BODY]);
        (PaymentViewModel::new(ApiClient::new(), state), renderer)
    }

    #[test]
    fn n_payments_n_rows_and_reload_replaces() {
        let (vm, renderer) = setup();
        let body = r#"[{"PaymentID": 1, "B_ID": 3, "Amount": "10"},
                       {"P_ID": 2, "B_ID": 4, "Amount": 12.5},
                       {"B_ID": 5, "Amount": null}]"#;
        let t = vm.state.begin_request(Loader::UserPayments);
        vm.apply_user_payments(t, parse_payload(200, body));
        let rows = renderer.content(PAYMENTS_TABLE_BODY);
        assert_eq!(rows.len(), 3);
        assert!(rows[2].children()[0].text_content() == "N/A");

        let t = vm.state.begin_request(Loader::UserPayments);
        vm.apply_user_payments(t, parse_payload(200, "[]"));
        let rows = renderer.content(PAYMENTS_TABLE_BODY);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text_content(), "No payments found");
    }

    #[test]
    fn error_payload_notifies_without_rows() {
        let (vm, renderer) = setup();
        let t = vm.state.begin_request(Loader::UserPayments);
        vm.apply_user_payments(t, parse_payload(200, r#"{"error": "X"}"#));
        assert_eq!(notices(&vm.state), vec![("X".to_string(), NotificationKind::Error)]);
        assert!(renderer.content(PAYMENTS_TABLE_BODY).is_empty());
    }

    #[test]
    fn non_array_payload_is_a_parse_failure() {
        let (vm, _renderer) = setup();
        let t = vm.state.begin_request(Loader::UserPayments);
        vm.apply_user_payments(t, parse_payload(200, r#"{"status": "ok"}"#));
        assert_eq!(
            notices(&vm.state),
            vec![(MSG_LOAD_PAYMENTS_FAILED.to_string(), NotificationKind::Error)]
        );
    }

    #[test]
    fn invoice_shows_info_notice() {
        let (vm, _renderer) = setup();
        vm.view_invoice(42);
        assert_eq!(
            notices(&vm.state),
            vec![("Viewing invoice #42".to_string(), NotificationKind::Info)]
        );
    }
}
