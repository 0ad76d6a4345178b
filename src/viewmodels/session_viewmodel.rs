// ============================================================================
// SESSION VIEWMODEL - Estado de login y contador de notificaciones
// ============================================================================
// El backend nunca responde 401 aquí: sin sesión devuelve un perfil vacío y
// count 0, así que los fallos solo se registran en el log.
// ============================================================================

use crate::models::{NotificationCount, UserProfile};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{NOTIFICATION_COUNT, USER_NAME};
use crate::views;

#[derive(Clone)]
pub struct SessionViewModel {
    api: ApiClient,
    state: AppState,
}

impl SessionViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    pub async fn check_logged_in_status(&self) {
        let ticket = self.state.begin_request(Loader::Profile);
        let result = self.api.get_profile().await;
        self.apply_profile(ticket, result);
    }

    pub fn apply_profile(&self, ticket: RequestTicket, result: Result<UserProfile, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(profile) => {
                if profile.is_logged_in() {
                    log::info!("👤 [SESSION] Sesión activa: {:?}", profile.name);
                } else {
                    log::info!("👤 [SESSION] Sin sesión");
                }
                self.state
                    .page
                    .commit(USER_NAME, views::render_user_name(Some(&profile)));
            }
            Err(e) => log::warn!("⚠️ [SESSION] No se pudo comprobar la sesión: {}", e),
        }
    }

    pub async fn check_notifications(&self) {
        let ticket = self.state.begin_request(Loader::NotificationCount);
        let result = self.api.get_notification_count().await;
        self.apply_notification_count(ticket, result);
    }

    pub fn apply_notification_count(&self, ticket: RequestTicket, result: Result<NotificationCount, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(count) => self.set_unread(count.unread()),
            Err(e) => log::warn!("⚠️ [SESSION] No se pudo consultar notificaciones: {}", e),
        }
    }

    fn set_unread(&self, unread: u32) {
        log::debug!("🔔 [SESSION] {} notificaciones sin leer", unread);
        self.state
            .page
            .commit(NOTIFICATION_COUNT, views::render_notification_badge(unread));
    }

    /// Botón `#mark-notifications-read`
    pub async fn mark_notifications_read(&self) {
        match self.api.mark_notifications_read().await {
            Ok(_) => {
                log::info!("✅ [SESSION] Notificaciones marcadas como leídas");
                self.set_unread(0);
            }
            Err(e) => log::warn!("⚠️ [SESSION] No se pudieron marcar como leídas: {}", e),
        }
    }
}
