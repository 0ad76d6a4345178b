// ============================================================================
// APP STATE - Estado de la página (Rc<RefCell>), compartido entre ViewModels
// ============================================================================
// El estado vive aquí y no en el DOM: las vistas se derivan de estos datos y
// Page aplica el diff resultante a cada región.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::config::CONFIG;
use crate::dom::renderer::{DomRenderer, Renderer};
use crate::models::{Booking, Service};
use crate::services::error::ApiError;
use crate::state::dialog::Dialog;
use crate::state::notifications::{NotificationCenter, NotificationKind};
use crate::state::page::Page;
use crate::state::requests::{Loader, RequestTicket, RequestTracker};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::constants::{DIALOG_ROOT, NOTIFICATION_STACK};
use crate::views;

#[derive(Clone)]
pub struct AppState {
    pub page: Page,
    pub clock: Rc<dyn Clock>,
    pub notifications: Rc<RefCell<NotificationCenter>>,
    pub requests: Rc<RefCell<RequestTracker>>,
    pub dialog: Rc<RefCell<Option<Dialog>>>,

    /// Reservas del cliente (None = `#user-bookings` nunca cargado). Se
    /// re-renderizan sin pedir nada tras una reseña o al llegar los precios.
    pub bookings: Rc<RefCell<Option<Vec<Booking>>>>,
    /// Catálogo cargado; da el precio a las reservas que no lo traen
    pub services: Rc<RefCell<Vec<Service>>>,
    /// Reseñas enviadas en esta página: booking_id → estrellas
    pub reviewed: Rc<RefCell<HashMap<i64, u8>>>,
}

impl AppState {
    /// Estado sobre el DOM real y el reloj del navegador
    pub fn new() -> Self {
        Self::with(Rc::new(DomRenderer), Rc::new(SystemClock))
    }

    pub fn with(renderer: Rc<dyn Renderer>, clock: Rc<dyn Clock>) -> Self {
        let notification_config = &CONFIG.notification_config;
        Self {
            page: Page::new(renderer),
            clock,
            notifications: Rc::new(RefCell::new(NotificationCenter::new(
                notification_config.timeout_ms,
                notification_config.max_visible,
            ))),
            requests: Rc::new(RefCell::new(RequestTracker::new())),
            dialog: Rc::new(RefCell::new(None)),
            bookings: Rc::new(RefCell::new(None)),
            services: Rc::new(RefCell::new(Vec::new())),
            reviewed: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    // ------------------------------------------------------------------------
    // Peticiones
    // ------------------------------------------------------------------------

    pub fn begin_request(&self, loader: Loader) -> RequestTicket {
        self.requests.borrow_mut().begin(loader)
    }

    /// false si ya salió una petición más nueva para el mismo loader
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        let current = self.requests.borrow().is_current(ticket);
        if !current {
            log::debug!("⏭️ [STATE] Respuesta obsoleta descartada: {:?}", ticket);
        }
        current
    }

    // ------------------------------------------------------------------------
    // Notificaciones
    // ------------------------------------------------------------------------

    pub fn notify(&self, message: &str, kind: NotificationKind) -> u64 {
        let now = self.clock.now_ms();
        let id = self.notifications.borrow_mut().push(message, kind, now);
        log::info!("🔔 [NOTIFY] {} ({})", message, kind);
        self.render_notifications();
        self.schedule_expiry(id, now);
        id
    }

    /// Error de API → notificación "error". El detalle técnico solo va al log.
    pub fn report_error(&self, context: &str, error: &ApiError, generic: &str) {
        if error.is_server() {
            log::warn!("⚠️ [{}] El backend respondió: {}", context, error);
        } else {
            log::error!("❌ [{}] {}", context, error);
        }
        self.notify(&error.user_message(generic), NotificationKind::Error);
    }

    /// Resultado de una mutación: éxito → notificación "success" y Some;
    /// error → se reporta y None
    pub fn finish_mutation<T>(
        &self,
        context: &str,
        result: Result<T, ApiError>,
        success: &str,
        generic: &str,
    ) -> Option<T> {
        match result {
            Ok(value) => {
                log::info!("✅ [{}] {}", context, success);
                self.notify(success, NotificationKind::Success);
                Some(value)
            }
            Err(e) => {
                self.report_error(context, &e, generic);
                None
            }
        }
    }

    pub fn dismiss_notification(&self, id: u64) {
        if self.notifications.borrow_mut().dismiss(id) {
            self.render_notifications();
        }
    }

    /// Fin del temporizador del banner `id` mostrado en `shown_at_ms`: se
    /// quita aunque el reloj vaya unos ms por detrás. De paso se barren los
    /// demás ya caducados.
    pub fn expire_notification(&self, id: u64, shown_at_ms: f64) {
        let removed = self.notifications.borrow_mut().expire_one(id, shown_at_ms);
        if removed {
            self.render_notifications();
        }
        self.expire_notifications();
    }

    /// Quita los banners vencidos según el reloj
    pub fn expire_notifications(&self) {
        let now = self.clock.now_ms();
        if self.notifications.borrow_mut().expire(now) {
            self.render_notifications();
        }
    }

    pub fn render_notifications(&self) {
        let nodes = {
            let center = self.notifications.borrow();
            views::notifications::render(center.items())
        };
        if !self.page.commit(NOTIFICATION_STACK, nodes) {
            log::warn!("⚠️ [NOTIFY] Contenedor de notificaciones no disponible");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self, id: u64, shown_at_ms: f64) {
        use gloo_timers::callback::Timeout;

        let timeout = self.notifications.borrow().timeout_ms() as u32;
        let state = self.clone();
        Timeout::new(timeout, move || state.expire_notification(id, shown_at_ms)).forget();
    }

    // Sin event loop fuera del navegador: los tests llaman a expire_* a mano
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_expiry(&self, _id: u64, _shown_at_ms: f64) {}

    // ------------------------------------------------------------------------
    // Diálogos
    // ------------------------------------------------------------------------

    /// Siempre monta de cero: los campos del diálogo anterior (texto ya
    /// tecleado) no deben sobrevivir en el DOM del nuevo
    pub fn open_dialog(&self, dialog: Dialog) {
        log::info!("💬 [DIALOG] Abriendo: {}", dialog.title());
        *self.dialog.borrow_mut() = Some(dialog);
        let nodes = views::dialog::render(self.dialog.borrow().as_ref());
        self.page.remount(DIALOG_ROOT, nodes);
    }

    /// Cierra el diálogo y devuelve lo que tenía (None si no había)
    pub fn close_dialog(&self) -> Option<Dialog> {
        let closed = self.dialog.borrow_mut().take();
        if closed.is_some() {
            self.render_dialog();
        }
        closed
    }

    pub fn current_dialog(&self) -> Option<Dialog> {
        self.dialog.borrow().clone()
    }

    /// Actualiza el campo sin re-renderizar: el input ya muestra el valor
    pub fn update_dialog(&self, field: crate::state::action::DialogField, value: String) {
        if let Some(dialog) = self.dialog.borrow_mut().as_mut() {
            dialog.set_field(field, value);
        }
    }

    pub fn render_dialog(&self) {
        let nodes = views::dialog::render(self.dialog.borrow().as_ref());
        self.page.commit(DIALOG_ROOT, nodes);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use chrono::NaiveDate;
    use crate::dom::renderer::testing::MemoryRenderer;
    use crate::utils::clock::ManualClock;

    /// Estado sobre MemoryRenderer con las regiones dadas, más el stack de
    /// notificaciones y la raíz de diálogos. Reloj fijo en 2024-05-01 12:00.
    pub fn state_with(regions: &[&str]) -> (AppState, Rc<MemoryRenderer>, Rc<ManualClock>) {
        let renderer = Rc::new(MemoryRenderer::with_regions(regions));
        renderer.add_region(NOTIFICATION_STACK);
        renderer.add_region(DIALOG_ROOT);
        let start = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid test date");
        let clock = Rc::new(ManualClock::at(start));
        let state = AppState::with(renderer.clone(), clock.clone());
        (state, renderer, clock)
    }

    /// (mensaje, tipo) de los banners visibles, más reciente primero
    pub fn notices(state: &AppState) -> Vec<(String, NotificationKind)> {
        state
            .notifications
            .borrow()
            .items()
            .iter()
            .map(|n| (n.message.clone(), n.kind))
            .collect()
    }
}
