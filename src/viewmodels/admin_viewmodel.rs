// ============================================================================
// ADMIN VIEWMODEL - Aprobación de proveedores
// ============================================================================

use crate::models::PendingProvider;
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::dialog::Dialog;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{
    MSG_APPROVE_FAILED, MSG_LOAD_PROVIDERS_FAILED, MSG_REJECT_FAILED, PENDING_PROVIDERS,
};
use crate::views;

#[derive(Clone)]
pub struct AdminViewModel {
    api: ApiClient,
    state: AppState,
}

impl AdminViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    pub async fn load_providers(&self) {
        let ticket = self.state.begin_request(Loader::PendingProviders);
        log::info!("👷 [ADMIN] Cargando proveedores pendientes...");
        let result = self.api.get_pending_providers().await;
        self.apply_providers(ticket, result);
    }

    pub fn apply_providers(&self, ticket: RequestTicket, result: Result<Vec<PendingProvider>, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(providers) => {
                log::info!("✅ [ADMIN] {} proveedores pendientes", providers.len());
                self.state
                    .page
                    .commit(PENDING_PROVIDERS, views::render_pending_providers(&providers));
            }
            Err(e) => self.state.report_error("ADMIN", &e, MSG_LOAD_PROVIDERS_FAILED),
        }
    }

    pub async fn approve_provider(&self, provider_id: i64) {
        log::info!("👷 [ADMIN] Aprobando proveedor {}", provider_id);
        let result = self.api.approve_provider(provider_id).await;
        let done = self.state.finish_mutation(
            "ADMIN",
            result,
            "Service provider approved successfully",
            MSG_APPROVE_FAILED,
        );
        if done.is_some() {
            self.load_providers().await;
        }
    }

    /// Pide confirmación antes de rechazar
    pub fn request_reject(&self, provider_id: i64) {
        self.state.open_dialog(Dialog::RejectProvider { provider_id });
    }

    pub async fn reject_provider(&self, provider_id: i64) {
        log::info!("👷 [ADMIN] Rechazando proveedor {}", provider_id);
        let result = self.api.reject_provider(provider_id).await;
        let done = self.state.finish_mutation(
            "ADMIN",
            result,
            "Service provider rejected successfully",
            MSG_REJECT_FAILED,
        );
        if done.is_some() {
            self.load_providers().await;
        }
    }
}
