// ============================================================================
// SERVICE VIEWMODEL - Catálogo de servicios y alta (admin)
// ============================================================================

use crate::models::{NewService, Service};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::notifications::NotificationKind;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{MSG_LOAD_SERVICES_FAILED, MSG_SERVICE_FAILED, SERVICES_LIST, SERVICE_SELECT};
use crate::viewmodels::booking_viewmodel::BookingViewModel;
use crate::views;

#[derive(Clone)]
pub struct ServiceViewModel {
    api: ApiClient,
    state: AppState,
}

impl ServiceViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    /// Una sola carga alimenta `#service-select` y `#services-list`
    pub async fn load_services(&self) {
        let ticket = self.state.begin_request(Loader::Services);
        log::info!("🛠️ [SERVICES] Cargando servicios...");
        let result = self.api.get_services().await;
        self.apply_services(ticket, result);
    }

    pub fn apply_services(&self, ticket: RequestTicket, result: Result<Vec<Service>, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(services) => {
                log::info!("✅ [SERVICES] {} servicios recibidos", services.len());
                self.state
                    .page
                    .commit(SERVICE_SELECT, views::render_service_options(&services));
                self.state
                    .page
                    .commit(SERVICES_LIST, views::render_service_cards(&services));
                *self.state.services.borrow_mut() = services;
                // Las reservas ya pintadas sin precio lo toman del catálogo
                BookingViewModel::new(self.api.clone(), self.state.clone()).render_user_bookings();
            }
            Err(e) => self.state.report_error("SERVICES", &e, MSG_LOAD_SERVICES_FAILED),
        }
    }

    /// Valida y envía el alta. Devuelve true si el backend la aceptó (el
    /// llamador limpia entonces el formulario).
    pub async fn create_service(&self, name: &str, description: &str, price: &str) -> bool {
        let service = match self.validate_new_service(name, description, price) {
            Some(s) => s,
            None => return false,
        };
        log::info!("🛠️ [SERVICES] Creando servicio {}", service.name);
        let result = self.api.create_service(&service).await;
        let done = self.state.finish_mutation(
            "SERVICES",
            result,
            "Service created successfully!",
            MSG_SERVICE_FAILED,
        );
        if done.is_none() {
            return false;
        }
        self.load_services().await;
        true
    }

    pub fn validate_new_service(&self, name: &str, description: &str, price: &str) -> Option<NewService> {
        match NewService::from_form(name, description, price) {
            Ok(service) => Some(service),
            Err(message) => {
                self.state.notify(&message, NotificationKind::Error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Booking;
    use crate::state::app_state::testing::{notices, state_with};
    use crate::utils::constants::USER_BOOKINGS;

    fn service(id: i64) -> Service {
        Service {
            id: Some(id),
            name: Some(format!("S{}", id)),
            price: Some(10.0),
            ..Default::default()
        }
    }

    #[test]
    fn one_load_fills_select_and_cards() {
        let (state, renderer, _clock) = state_with(&[SERVICE_SELECT, SERVICES_LIST]);
        let vm = ServiceViewModel::new(ApiClient::new(), state);
        let t = vm.state.begin_request(Loader::Services);
        vm.apply_services(t, Ok(vec![service(1), service(2)]));

        assert_eq!(renderer.content(SERVICE_SELECT).len(), 3);
        assert_eq!(renderer.content(SERVICES_LIST).len(), 2);
        assert_eq!(vm.state.services.borrow().len(), 2);
    }

    #[test]
    fn late_catalog_prices_rendered_bookings() {
        let (state, renderer, _clock) = state_with(&[USER_BOOKINGS]);
        *state.bookings.borrow_mut() = Some(vec![Booking {
            id: Some(3),
            service_id: Some(2),
            status: Some("Pending".into()),
            ..Default::default()
        }]);
        let vm = ServiceViewModel::new(ApiClient::new(), state);
        let t = vm.state.begin_request(Loader::Services);
        vm.apply_services(t, Ok(vec![service(2)]));
        assert!(renderer.content(USER_BOOKINGS)[0].text_content().contains("Pay $10.00"));
    }

    #[test]
    fn select_only_page_still_works() {
        let (state, renderer, _clock) = state_with(&[SERVICE_SELECT]);
        let vm = ServiceViewModel::new(ApiClient::new(), state);
        let t = vm.state.begin_request(Loader::Services);
        vm.apply_services(t, Ok(vec![service(1)]));
        assert_eq!(renderer.content(SERVICE_SELECT).len(), 2);
    }

    #[test]
    fn missing_name_or_price_is_rejected_locally() {
        let (state, _renderer, _clock) = state_with(&[]);
        let vm = ServiceViewModel::new(ApiClient::new(), state);
        assert!(vm.validate_new_service("", "desc", "10").is_none());
        assert_eq!(
            notices(&vm.state),
            vec![("Name and price are required".to_string(), NotificationKind::Error)]
        );
        let ok = vm.validate_new_service("Gardening", "", "30").unwrap();
        assert_eq!(ok.price, 30.0);
    }
}
