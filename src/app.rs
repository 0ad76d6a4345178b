// ============================================================================
// APP - Arranque de la página y enrutado de acciones a los ViewModels
// ============================================================================
// No hay router: los landmarks presentes en el HTML deciden qué loaders se
// ejecutan. Las acciones que llegan desde los nodos virtuales (dispatch) se
// reparten aquí.
// ============================================================================

use std::future::Future;
use wasm_bindgen::prelude::*;
use web_sys::Event;
use crate::config::CONFIG;
use crate::dom::element::{
    create_element, data_attribute, document, get_element_by_id, input_value, query_param,
    query_selector, set_input_value,
};
use crate::dom::events::{bind_action_delegation, on_click, on_event};
use crate::services::ApiClient;
use crate::state::action::Action;
use crate::state::app_state::AppState;
use crate::state::dialog::Dialog;
use crate::state::page::Page;
use crate::utils::constants::*;
use crate::utils::validation::validate_date_time;
use crate::viewmodels::form_viewmodel;
use crate::viewmodels::{
    AdminViewModel, BookingViewModel, EarningsViewModel, PaymentViewModel, ReviewViewModel,
    ServiceViewModel, SessionViewModel,
};

/// Cargas iniciales según los landmarks de la página
#[derive(Debug, Clone, PartialEq)]
pub enum StartupLoad {
    UserBookings,
    UserPayments,
    Services,
    ProviderReviews(String),
    ProviderDashboard,
    AdminBookings,
    PendingProviders,
}

/// Decide qué loaders corren. `#services-list` y `#service-select` comparten
/// una sola carga; las reseñas necesitan id de proveedor.
pub fn plan_startup(page: &Page, provider_id: Option<String>) -> Vec<StartupLoad> {
    let mut plan = Vec::new();
    if page.has_region(USER_BOOKINGS) {
        plan.push(StartupLoad::UserBookings);
    }
    if page.has_region(PAYMENTS_TABLE_BODY) {
        plan.push(StartupLoad::UserPayments);
    }
    if page.has_region(SERVICES_LIST) || page.has_region(SERVICE_SELECT) {
        plan.push(StartupLoad::Services);
    }
    if page.has_region(PROVIDER_REVIEWS) {
        match provider_id {
            Some(id) => plan.push(StartupLoad::ProviderReviews(id)),
            None => log::warn!("⚠️ [APP] #provider-reviews sin provider_id, no se cargan reseñas"),
        }
    }
    if page.has_region(&format!("#{}", PROVIDER_DASHBOARD_ID)) {
        plan.push(StartupLoad::ProviderDashboard);
    }
    if page.has_region(ADMIN_BOOKINGS) {
        plan.push(StartupLoad::AdminBookings);
    }
    if page.has_region(PENDING_PROVIDERS) {
        plan.push(StartupLoad::PendingProviders);
    }
    plan
}

fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Aplicación: cliente API + estado compartido. Clonar es barato (Rc).
#[derive(Clone)]
pub struct App {
    api: ApiClient,
    state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), AppState::new())
    }

    pub fn with(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> SessionViewModel {
        SessionViewModel::new(self.api.clone(), self.state.clone())
    }

    pub fn bookings(&self) -> BookingViewModel {
        BookingViewModel::new(self.api.clone(), self.state.clone())
    }

    pub fn payments(&self) -> PaymentViewModel {
        PaymentViewModel::new(self.api.clone(), self.state.clone())
    }

    pub fn services(&self) -> ServiceViewModel {
        ServiceViewModel::new(self.api.clone(), self.state.clone())
    }

    pub fn reviews(&self) -> ReviewViewModel {
        ReviewViewModel::new(self.api.clone(), self.state.clone())
    }

    pub fn earnings(&self) -> EarningsViewModel {
        EarningsViewModel::new(self.api.clone(), self.state.clone())
    }

    pub fn admin(&self) -> AdminViewModel {
        AdminViewModel::new(self.api.clone(), self.state.clone())
    }

    // ------------------------------------------------------------------------
    // Arranque
    // ------------------------------------------------------------------------

    /// Equivalente a DOMContentLoaded
    pub fn start(&self) -> Result<(), JsValue> {
        log::info!("🚀 [APP] Iniciando ({})", CONFIG.api_base_url);

        self.create_containers()?;
        bind_action_delegation()?;
        form_viewmodel::bind_forms()?;
        form_viewmodel::bind_required_inputs()?;

        let session = self.session();
        spawn(async move { session.check_logged_in_status().await });

        let plan = plan_startup(&self.state.page, provider_id_from_page());
        log::info!("🧭 [APP] Cargas iniciales: {:?}", plan);
        for load in plan {
            self.run_startup_load(load)?;
        }

        self.bind_create_service_form()?;
        self.bind_mark_notifications_read()?;
        self.start_notification_poll();
        Ok(())
    }

    fn run_startup_load(&self, load: StartupLoad) -> Result<(), JsValue> {
        match load {
            StartupLoad::UserBookings => {
                let vm = self.bookings();
                spawn(async move { vm.load_user_bookings().await });
            }
            StartupLoad::UserPayments => {
                let vm = self.payments();
                spawn(async move { vm.load_user_payments().await });
            }
            StartupLoad::Services => {
                let vm = self.services();
                spawn(async move { vm.load_services().await });
            }
            StartupLoad::ProviderReviews(provider_id) => {
                let vm = self.reviews();
                spawn(async move { vm.load_provider_reviews(&provider_id).await });
            }
            StartupLoad::ProviderDashboard => {
                let vm = self.earnings();
                spawn(async move { vm.refresh().await });
                if let Some(button) = get_element_by_id(REFRESH_EARNINGS_ID) {
                    on_click(&button, |_| crate::dispatch(Action::RefreshEarnings))?;
                }
            }
            StartupLoad::AdminBookings => {
                let vm = self.bookings();
                spawn(async move { vm.load_bookings().await });
            }
            StartupLoad::PendingProviders => {
                let vm = self.admin();
                spawn(async move { vm.load_providers().await });
            }
        }
        Ok(())
    }

    /// Stack de notificaciones (primer hijo de `.container`) y raíz de diálogos
    fn create_containers(&self) -> Result<(), JsValue> {
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let body = doc.body().ok_or_else(|| JsValue::from_str("No body"))?;

        if get_element_by_id(NOTIFICATION_STACK_ID).is_none() {
            let stack = create_element("div")?;
            stack.set_id(NOTIFICATION_STACK_ID);
            stack.set_class_name("notification-stack");
            let host: web_sys::Element = match query_selector(MAIN_CONTAINER)? {
                Some(container) => container,
                None => body.clone().into(),
            };
            host.insert_before(&stack, host.first_child().as_ref())?;
        }

        if get_element_by_id(DIALOG_ROOT_ID).is_none() {
            let root = create_element("div")?;
            root.set_id(DIALOG_ROOT_ID);
            body.append_child(&root)?;
        }
        Ok(())
    }

    fn bind_create_service_form(&self) -> Result<(), JsValue> {
        let form = match get_element_by_id(CREATE_SERVICE_FORM_ID) {
            Some(f) => f,
            None => return Ok(()),
        };
        let app = self.clone();
        on_event(&form, "submit", move |event: Event| {
            event.prevent_default();
            app.submit_new_service();
        })
    }

    /// Lee `#new-service-*`, crea el servicio y vacía los campos si se creó
    pub fn submit_new_service(&self) {
        let name = input_value(NEW_SERVICE_NAME_ID);
        let description = input_value(NEW_SERVICE_DESCRIPTION_ID);
        let price = input_value(NEW_SERVICE_PRICE_ID);
        let vm = self.services();
        spawn(async move {
            if vm.create_service(&name, &description, &price).await {
                clear_new_service_form();
            }
        });
    }

    fn bind_mark_notifications_read(&self) -> Result<(), JsValue> {
        if let Some(button) = get_element_by_id(MARK_NOTIFICATIONS_READ_ID) {
            on_click(&button, |_| crate::dispatch(Action::MarkNotificationsRead))?;
        }
        Ok(())
    }

    /// Consulta inmediata y luego cada `poll_interval_ms` durante toda la vida
    /// de la página
    #[cfg(target_arch = "wasm32")]
    fn start_notification_poll(&self) {
        use gloo_timers::callback::Interval;

        let session = self.session();
        spawn(async move { session.check_notifications().await });

        let session = self.session();
        Interval::new(CONFIG.notification_config.poll_interval_ms, move || {
            let session = session.clone();
            spawn(async move { session.check_notifications().await });
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_notification_poll(&self) {}

    // ------------------------------------------------------------------------
    // Acciones
    // ------------------------------------------------------------------------

    pub fn dispatch(&self, action: Action) {
        log::debug!("🎯 [APP] Acción: {:?}", action);
        match action {
            Action::CancelBooking(id) => self.bookings().request_cancel(id),
            Action::ConfirmBooking(id) => {
                let vm = self.bookings();
                spawn(async move { vm.confirm_booking(id).await });
            }
            Action::PayBooking { booking_id, amount } => {
                let vm = self.payments();
                spawn(async move { vm.process_payment(booking_id, amount).await });
            }
            Action::SubmitReview(id) => {
                let rating = input_value(&rating_input_id(id));
                let comment = input_value(&comment_input_id(id));
                let vm = self.reviews();
                spawn(async move { vm.submit_review(id, &rating, &comment).await });
            }
            Action::BookService { service_id, name, price, provider_id } => {
                self.bookings().start_booking(service_id, &name, price, provider_id)
            }
            Action::ViewInvoice(id) => self.payments().view_invoice(id),
            Action::ApproveProvider(id) => {
                let vm = self.admin();
                spawn(async move { vm.approve_provider(id).await });
            }
            Action::RejectProvider(id) => self.admin().request_reject(id),
            Action::RefreshEarnings => {
                let vm = self.earnings();
                spawn(async move { vm.refresh().await });
            }
            Action::DismissNotification(id) => self.state.dismiss_notification(id),
            Action::MarkNotificationsRead => {
                let vm = self.session();
                spawn(async move { vm.mark_notifications_read().await });
            }
            Action::DialogInput { field, value } => self.state.update_dialog(field, value),
            Action::DialogConfirm => self.confirm_dialog(),
            Action::DialogDismiss => {
                self.state.close_dialog();
            }
        }
    }

    /// Confirma el diálogo abierto. Una fecha pasada deja el diálogo abierto
    /// para corregirla.
    fn confirm_dialog(&self) {
        if let Some(Dialog::BookService { date, time, .. }) = self.state.current_dialog() {
            if !validate_date_time(&self.state, &date, &time) {
                return;
            }
        }

        match self.state.close_dialog() {
            Some(Dialog::CancelBooking { booking_id, reason }) => {
                let vm = self.bookings();
                spawn(async move { vm.cancel_booking(booking_id, reason).await });
            }
            Some(Dialog::BookService { service_id, provider_id, date, time, .. }) => {
                let vm = self.bookings();
                spawn(async move { vm.create_booking(service_id, date, time, provider_id).await });
            }
            Some(Dialog::RejectProvider { provider_id }) => {
                let vm = self.admin();
                spawn(async move { vm.reject_provider(provider_id).await });
            }
            None => log::debug!("⏭️ [APP] Confirmación sin diálogo abierto"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// `?provider_id=` o, si no, `data-provider-id` de `#provider-reviews`
fn provider_id_from_page() -> Option<String> {
    query_param("provider_id").or_else(|| {
        query_selector(PROVIDER_REVIEWS)
            .ok()
            .flatten()
            .and_then(|el| data_attribute(&el, "providerId"))
    })
}

fn clear_new_service_form() {
    for id in [NEW_SERVICE_NAME_ID, NEW_SERVICE_DESCRIPTION_ID, NEW_SERVICE_PRICE_ID] {
        set_input_value(id, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::action::DialogField;
    use crate::state::app_state::testing::{notices, state_with};
    use crate::state::notifications::NotificationKind;

    #[test]
    fn startup_follows_landmarks() {
        let (state, _renderer, _clock) = state_with(&[
            USER_BOOKINGS,
            SERVICE_SELECT,
            SERVICES_LIST,
            PROVIDER_REVIEWS,
            "#provider-dashboard",
        ]);
        let plan = plan_startup(&state.page, Some("12".into()));
        assert_eq!(
            plan,
            vec![
                StartupLoad::UserBookings,
                StartupLoad::Services,
                StartupLoad::ProviderReviews("12".into()),
                StartupLoad::ProviderDashboard,
            ]
        );
    }

    #[test]
    fn reviews_need_a_provider_id() {
        let (state, _renderer, _clock) = state_with(&[PROVIDER_REVIEWS, PENDING_PROVIDERS]);
        assert_eq!(plan_startup(&state.page, None), vec![StartupLoad::PendingProviders]);
    }

    #[test]
    fn cancel_dialog_flow_without_network() {
        let (state, _renderer, _clock) = state_with(&[]);
        let app = App::with(ApiClient::new(), state);
        app.dispatch(Action::CancelBooking(4));
        app.dispatch(Action::DialogInput { field: DialogField::Reason, value: "Moved".into() });
        assert_eq!(
            app.state().current_dialog(),
            Some(Dialog::CancelBooking { booking_id: 4, reason: "Moved".into() })
        );
        app.dispatch(Action::DialogDismiss);
        assert!(app.state().current_dialog().is_none());
    }

    #[test]
    fn past_booking_date_keeps_dialog_open() {
        let (state, _renderer, _clock) = state_with(&[]);
        let app = App::with(ApiClient::new(), state);
        app.dispatch(Action::BookService {
            service_id: 1,
            name: "Cleaning".into(),
            price: Some(20.0),
            provider_id: None,
        });
        app.dispatch(Action::DialogInput { field: DialogField::Date, value: "2000-01-01".into() });
        app.dispatch(Action::DialogConfirm);

        assert!(app.state().current_dialog().is_some());
        assert_eq!(
            notices(app.state()),
            vec![(MSG_PAST_DATE.to_string(), NotificationKind::Warning)]
        );
    }

    #[test]
    fn invoice_and_dismiss() {
        let (state, _renderer, _clock) = state_with(&[]);
        let app = App::with(ApiClient::new(), state);
        app.dispatch(Action::ViewInvoice(9));
        let id = app.state().notifications.borrow().latest().unwrap().id;
        app.dispatch(Action::DismissNotification(id));
        assert!(notices(app.state()).is_empty());
    }
}
