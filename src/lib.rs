// ============================================================================
// BOOKING PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: funciones puras datos -> nodos virtuales (sin lógica)
// - ViewModels: carga, mutaciones y notificaciones por página
// - Services: SOLO comunicación API
// - State: regiones montadas, notificaciones, diálogos (Rc<RefCell>)
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::action::Action;
use crate::state::notifications::NotificationKind;

// Instancia global de App (un único hilo en WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Booking Portal - Rust Puro + MVVM");

    let app = App::new();
    APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));
    app.start()
}

fn current_app() -> Option<App> {
    let app = APP.with(|cell| cell.borrow().clone());
    if app.is_none() {
        log::error!("❌ [MAIN] App no está inicializada");
    }
    app
}

/// Punto de entrada de las acciones que disparan los nodos renderizados.
/// Se clona la App para no mantener el borrow durante la acción.
pub fn dispatch(action: Action) {
    if let Some(app) = current_app() {
        app.dispatch(action);
    }
}

// ============================================================================
// API PÚBLICA PARA JAVASCRIPT (páginas con handlers inline)
// ============================================================================

#[wasm_bindgen]
pub fn cancel_booking(booking_id: i64) {
    dispatch(Action::CancelBooking(booking_id));
}

#[wasm_bindgen]
pub fn confirm_booking(booking_id: i64) {
    dispatch(Action::ConfirmBooking(booking_id));
}

#[wasm_bindgen]
pub fn approve_provider(provider_id: i64) {
    dispatch(Action::ApproveProvider(provider_id));
}

#[wasm_bindgen]
pub fn reject_provider(provider_id: i64) {
    dispatch(Action::RejectProvider(provider_id));
}

#[wasm_bindgen]
pub fn submit_review(booking_id: i64) {
    dispatch(Action::SubmitReview(booking_id));
}

#[wasm_bindgen]
pub fn create_service() {
    if let Some(app) = current_app() {
        app.submit_new_service();
    }
}

/// Promise<bool>: false si el proveedor no está disponible o la consulta falla
#[wasm_bindgen]
pub async fn check_provider_availability(
    provider_id: i64,
    date: String,
    time: String,
) -> Result<JsValue, JsValue> {
    let available = match current_app() {
        Some(app) => app.bookings().check_provider_availability(provider_id, &date, &time).await,
        None => false,
    };
    Ok(JsValue::from_bool(available))
}

#[wasm_bindgen]
pub fn process_payment(booking_id: i64, amount: Option<f64>) {
    dispatch(Action::PayBooking { booking_id, amount });
}

#[wasm_bindgen]
pub fn view_invoice(invoice_id: i64) {
    dispatch(Action::ViewInvoice(invoice_id));
}

/// `kind`: success | error | warning | info (por defecto info)
#[wasm_bindgen]
pub fn show_notification(message: &str, kind: Option<String>) {
    if let Some(app) = current_app() {
        let kind = kind
            .as_deref()
            .map(NotificationKind::parse)
            .unwrap_or(NotificationKind::Info);
        app.state().notify(message, kind);
    }
}

#[wasm_bindgen]
pub fn validate_form(form_id: &str) -> bool {
    viewmodels::form_viewmodel::validate_form(form_id)
}
