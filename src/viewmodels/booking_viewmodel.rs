// ============================================================================
// BOOKING VIEWMODEL - Reservas del cliente y del administrador
// ============================================================================
// Cada loader pide un ticket antes de la petición; apply_* descarta la
// respuesta si mientras tanto salió otra más nueva.
// ============================================================================

use crate::models::{Availability, Booking, NewBooking};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::dialog::Dialog;
use crate::state::notifications::NotificationKind;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{
    ADMIN_BOOKINGS, MSG_BOOKING_FAILED, MSG_CANCEL_FAILED, MSG_CONFIRM_FAILED,
    MSG_LOAD_BOOKINGS_FAILED, MSG_PROVIDER_UNAVAILABLE, USER_BOOKINGS,
};
use crate::utils::format::tomorrow_date;
use crate::utils::validation::validate_date_time;
use crate::viewmodels::session_viewmodel::SessionViewModel;
use crate::views;

#[derive(Clone)]
pub struct BookingViewModel {
    api: ApiClient,
    state: AppState,
}

impl BookingViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    // ------------------------------------------------------------------------
    // Loaders
    // ------------------------------------------------------------------------

    pub async fn load_user_bookings(&self) {
        let ticket = self.state.begin_request(Loader::UserBookings);
        log::info!("📋 [BOOKINGS] Cargando reservas del usuario...");
        let result = self.api.get_user_bookings().await;
        self.apply_user_bookings(ticket, result);
    }

    pub fn apply_user_bookings(&self, ticket: RequestTicket, result: Result<Vec<Booking>, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(bookings) => {
                log::info!("✅ [BOOKINGS] {} reservas recibidas", bookings.len());
                *self.state.bookings.borrow_mut() = Some(bookings);
                self.render_user_bookings();
            }
            Err(e) => self.state.report_error("BOOKINGS", &e, MSG_LOAD_BOOKINGS_FAILED),
        }
    }

    /// Re-renderiza `#user-bookings` desde el estado (sin pedir nada)
    pub fn render_user_bookings(&self) -> bool {
        let nodes = {
            let bookings = self.state.bookings.borrow();
            let bookings = match bookings.as_ref() {
                Some(b) => b,
                None => return false,
            };
            views::render_user_bookings(
                bookings,
                &self.state.reviewed.borrow(),
                &self.state.services.borrow(),
            )
        };
        self.state.page.commit(USER_BOOKINGS, nodes)
    }

    /// Listado de administración (`#admin-bookings`)
    pub async fn load_bookings(&self) {
        let ticket = self.state.begin_request(Loader::AdminBookings);
        log::info!("📋 [ADMIN] Cargando todas las reservas...");
        let result = self.api.get_admin_bookings().await;
        self.apply_admin_bookings(ticket, result);
    }

    pub fn apply_admin_bookings(&self, ticket: RequestTicket, result: Result<Vec<Booking>, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(bookings) => {
                log::info!("✅ [ADMIN] {} reservas recibidas", bookings.len());
                self.state
                    .page
                    .commit(ADMIN_BOOKINGS, views::render_admin_bookings(&bookings));
            }
            Err(e) => self.state.report_error("ADMIN", &e, MSG_LOAD_BOOKINGS_FAILED),
        }
    }

    // ------------------------------------------------------------------------
    // Cancelar / confirmar
    // ------------------------------------------------------------------------

    /// Abre el diálogo de cancelación; la petición sale al confirmarlo
    pub fn request_cancel(&self, booking_id: i64) {
        self.state.open_dialog(Dialog::cancel_booking(booking_id));
    }

    pub async fn cancel_booking(&self, booking_id: i64, reason: String) {
        log::info!("🗑️ [BOOKINGS] Cancelando reserva {} ({})", booking_id, reason);
        let result = self.api.cancel_booking(booking_id, &reason).await;
        let done = self.state.finish_mutation(
            "BOOKINGS",
            result,
            "Booking cancelled successfully!",
            MSG_CANCEL_FAILED,
        );
        if done.is_some() {
            self.load_user_bookings().await;
            SessionViewModel::new(self.api.clone(), self.state.clone())
                .check_notifications()
                .await;
        }
    }

    pub async fn confirm_booking(&self, booking_id: i64) {
        log::info!("✔️ [ADMIN] Confirmando reserva {}", booking_id);
        let result = self.api.confirm_booking(booking_id).await;
        let done = self.state.finish_mutation(
            "ADMIN",
            result,
            "Booking confirmed successfully",
            MSG_CONFIRM_FAILED,
        );
        if done.is_some() {
            match self.confirm_reload_target() {
                Loader::AdminBookings => self.load_bookings().await,
                _ => self.load_user_bookings().await,
            }
        }
    }

    /// Tras confirmar se recarga el listado de admin si está en la página;
    /// si no, el del cliente
    pub fn confirm_reload_target(&self) -> Loader {
        if self.state.page.has_region(ADMIN_BOOKINGS) {
            Loader::AdminBookings
        } else {
            Loader::UserBookings
        }
    }

    // ------------------------------------------------------------------------
    // Nueva reserva
    // ------------------------------------------------------------------------

    /// "Book Now": abre el diálogo con fecha de mañana y las 10:00
    pub fn start_booking(
        &self,
        service_id: i64,
        service_name: &str,
        price: Option<f64>,
        provider_id: Option<i64>,
    ) {
        let tomorrow = tomorrow_date(self.state.clock.now_local().date());
        self.state.open_dialog(Dialog::book_service(
            service_id,
            service_name,
            price,
            provider_id,
            tomorrow,
        ));
    }

    /// Disponibilidad del proveedor; cualquier fallo cuenta como "no"
    pub async fn check_provider_availability(&self, provider_id: i64, date: &str, time: &str) -> bool {
        match self.api.check_availability(provider_id, date, time).await {
            Ok(availability) => availability.available,
            Err(e) => {
                log::error!("❌ [BOOKINGS] Error comprobando disponibilidad: {}", e);
                false
            }
        }
    }

    /// Antes del POST: solo un `available: false` explícito detiene la
    /// reserva. Si la consulta falla se sigue y el backend decide.
    pub fn availability_allows(&self, result: Result<Availability, ApiError>) -> bool {
        match result {
            Ok(availability) if availability.available => true,
            Ok(_) => {
                self.state.notify(MSG_PROVIDER_UNAVAILABLE, NotificationKind::Warning);
                false
            }
            Err(e) => {
                log::warn!("⚠️ [BOOKINGS] Disponibilidad no comprobada ({}), se envía la reserva", e);
                true
            }
        }
    }

    pub async fn create_booking(
        &self,
        service_id: i64,
        date: String,
        time: String,
        provider_id: Option<i64>,
    ) {
        if !validate_date_time(&self.state, &date, &time) {
            return;
        }

        // Consulta orientativa: entre esta comprobación y el POST el hueco
        // puede ocuparse; el backend tiene la última palabra.
        if let Some(provider_id) = provider_id {
            let availability = self.api.check_availability(provider_id, &date, &time).await;
            if !self.availability_allows(availability) {
                return;
            }
        }

        log::info!("📅 [BOOKINGS] Creando reserva servicio={} {} {}", service_id, date, time);
        let booking = NewBooking {
            service_id,
            booking_date: date,
            booking_time: time,
        };
        let result = self.api.create_booking(&booking).await;
        let done = self.state.finish_mutation(
            "BOOKINGS",
            result,
            "Booking created successfully!",
            MSG_BOOKING_FAILED,
        );
        if done.is_some() && self.state.page.has_region(USER_BOOKINGS) {
            self.load_user_bookings().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::dom::renderer::testing::MemoryRenderer;
    use crate::dom::VNode;
    use crate::services::parse_payload;
    use crate::state::action::Action;
    use crate::state::app_state::testing::{notices, state_with};

    fn booking(id: i64) -> Booking {
        Booking {
            id: Some(id),
            service_name: Some(format!("Service {}", id)),
            status: Some("Pending".into()),
            ..Default::default()
        }
    }

    fn setup(regions: &[&str]) -> (BookingViewModel, Rc<MemoryRenderer>) {
        let (state, renderer, _clock) = state_with(regions);
        (BookingViewModel::new(ApiClient::new(), state), renderer)
    }

    #[test]
    fn reload_replaces_cards() {
        let (vm, renderer) = setup(&[USER_BOOKINGS]);
        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(t, Ok(vec![booking(1), booking(2), booking(3)]));
        assert_eq!(renderer.content(USER_BOOKINGS).len(), 3);

        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(t, Ok(vec![booking(4)]));
        let content = renderer.content(USER_BOOKINGS);
        assert_eq!(content.len(), 1);
        assert!(content[0].text_content().contains("Service 4"));
    }

    #[test]
    fn server_error_notifies_and_keeps_previous_rows() {
        let (vm, renderer) = setup(&[USER_BOOKINGS]);
        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(t, Ok(vec![booking(1)]));

        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(t, Err(ApiError::Server("X".into())));
        assert_eq!(notices(&vm.state), vec![("X".to_string(), NotificationKind::Error)]);
        assert_eq!(renderer.content(USER_BOOKINGS).len(), 1);
    }

    #[test]
    fn first_load_error_renders_no_rows() {
        let (vm, renderer) = setup(&[USER_BOOKINGS]);
        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(t, Err(ApiError::Server("X".into())));
        assert!(renderer.content(USER_BOOKINGS).is_empty());
        assert!(renderer.mounts.borrow().iter().all(|m| m.as_str() != USER_BOOKINGS));
    }

    #[test]
    fn transport_failure_uses_generic_message() {
        let (vm, _renderer) = setup(&[USER_BOOKINGS]);
        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(t, Err(ApiError::Network("connection reset".into())));
        assert_eq!(
            notices(&vm.state),
            vec![(MSG_LOAD_BOOKINGS_FAILED.to_string(), NotificationKind::Error)]
        );
    }

    #[test]
    fn stale_response_is_discarded() {
        let (vm, renderer) = setup(&[USER_BOOKINGS]);
        let old = vm.state.begin_request(Loader::UserBookings);
        let new = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(new, Ok(vec![booking(2)]));
        vm.apply_user_bookings(old, Ok(vec![booking(1), booking(9)]));
        let content: Vec<VNode> = renderer.content(USER_BOOKINGS);
        assert_eq!(content.len(), 1);
        assert!(content[0].text_content().contains("Service 2"));
    }

    #[test]
    fn admin_rows_render_in_their_region() {
        let (vm, renderer) = setup(&[ADMIN_BOOKINGS]);
        let t = vm.state.begin_request(Loader::AdminBookings);
        vm.apply_admin_bookings(t, Ok(vec![booking(1), booking(2)]));
        assert_eq!(renderer.content(ADMIN_BOOKINGS).len(), 2);
        assert!(renderer.content(USER_BOOKINGS).is_empty());
    }

    #[test]
    fn confirm_reloads_admin_list_when_present() {
        let (admin, _renderer) = setup(&[ADMIN_BOOKINGS, USER_BOOKINGS]);
        assert_eq!(admin.confirm_reload_target(), Loader::AdminBookings);
        let (customer, _renderer) = setup(&[USER_BOOKINGS]);
        assert_eq!(customer.confirm_reload_target(), Loader::UserBookings);
    }

    #[test]
    fn unavailable_provider_stops_booking() {
        let (vm, _renderer) = setup(&[]);
        assert!(!vm.availability_allows(parse_payload(200, r#"{"available": false}"#)));
        assert_eq!(
            notices(&vm.state),
            vec![(MSG_PROVIDER_UNAVAILABLE.to_string(), NotificationKind::Warning)]
        );
    }

    #[test]
    fn available_provider_lets_booking_through() {
        let (vm, _renderer) = setup(&[]);
        assert!(vm.availability_allows(parse_payload(200, r#"{"available": true}"#)));
        assert!(notices(&vm.state).is_empty());
    }

    #[test]
    fn failed_availability_check_does_not_block() {
        let (vm, _renderer) = setup(&[]);
        assert!(vm.availability_allows(Err(ApiError::Network("offline".into()))));
        assert!(vm.availability_allows(parse_payload(404, r#"{"error": "Not Found"}"#)));
        assert!(notices(&vm.state).is_empty());
    }

    #[test]
    fn pay_amount_uses_loaded_service_price() {
        let (vm, renderer) = setup(&[USER_BOOKINGS]);
        *vm.state.services.borrow_mut() =
            parse_payload(200, r#"[{"S_ID": 9, "Name": "Cleaning", "Price": "30"}]"#).unwrap();
        let t = vm.state.begin_request(Loader::UserBookings);
        vm.apply_user_bookings(
            t,
            parse_payload(200, r#"[{"B_ID": 1, "S_ID": 9, "Status": "Pending", "payment_made": 0}]"#),
        );
        let cards = renderer.content(USER_BOOKINGS);
        assert!(cards[0]
            .actions()
            .contains(&Action::PayBooking { booking_id: 1, amount: Some(30.0) }));
    }

    #[test]
    fn cancel_and_book_open_dialogs() {
        let (vm, _renderer) = setup(&[]);
        vm.request_cancel(5);
        assert_eq!(vm.state.current_dialog(), Some(Dialog::cancel_booking(5)));

        vm.start_booking(3, "Cleaning", Some(25.0), None);
        match vm.state.current_dialog() {
            // El reloj de test marca 2024-05-01
            Some(Dialog::BookService { date, time, .. }) => {
                assert_eq!(date, "2024-05-02");
                assert_eq!(time, "10:00");
            }
            other => panic!("unexpected dialog {:?}", other),
        }
    }
}
