// ============================================================================
// EARNINGS VIEWMODEL - Dashboard de ingresos del proveedor
// ============================================================================

use crate::models::{PaymentHistory, ProviderEarnings};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{
    MONTH_EARNINGS, MSG_LOAD_EARNINGS_FAILED, MSG_LOAD_HISTORY_FAILED, PAYMENT_HISTORY_BODY,
    PENDING_PAYMENTS, TOTAL_EARNINGS,
};
use crate::views;

#[derive(Clone)]
pub struct EarningsViewModel {
    api: ApiClient,
    state: AppState,
}

impl EarningsViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    /// Botón `#refresh-earnings` y arranque del dashboard
    pub async fn refresh(&self) {
        self.load_provider_earnings().await;
        self.load_payment_history().await;
    }

    pub async fn load_provider_earnings(&self) {
        let ticket = self.state.begin_request(Loader::EarningsDashboard);
        log::info!("💰 [EARNINGS] Cargando resumen de ingresos...");
        let result = self.api.get_earnings_dashboard().await;
        self.apply_earnings(ticket, result);
    }

    pub fn apply_earnings(&self, ticket: RequestTicket, result: Result<ProviderEarnings, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(earnings) => {
                let page = &self.state.page;
                page.commit(TOTAL_EARNINGS, views::render_amount(earnings.total_earnings));
                page.commit(MONTH_EARNINGS, views::render_amount(earnings.month_earnings));
                page.commit(PENDING_PAYMENTS, views::render_amount(earnings.pending_amount));
            }
            Err(e) => self.state.report_error("EARNINGS", &e, MSG_LOAD_EARNINGS_FAILED),
        }
    }

    pub async fn load_payment_history(&self) {
        let ticket = self.state.begin_request(Loader::PaymentHistory);
        log::info!("💰 [EARNINGS] Cargando historial de pagos...");
        let result = self.api.get_payment_history().await;
        self.apply_payment_history(ticket, result);
    }

    pub fn apply_payment_history(&self, ticket: RequestTicket, result: Result<PaymentHistory, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(history) => {
                log::info!("✅ [EARNINGS] {} pagos en el historial", history.recent_payments.len());
                self.state.page.commit(
                    PAYMENT_HISTORY_BODY,
                    views::render_payment_history(&history.recent_payments),
                );
            }
            Err(e) => self.state.report_error("EARNINGS", &e, MSG_LOAD_HISTORY_FAILED),
        }
    }
}
