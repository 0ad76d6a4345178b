// ============================================================================
// REVIEW VIEWMODEL - Envío de reseñas y reseñas de un proveedor
// ============================================================================

use crate::dom::VNode;
use crate::models::{ProviderReviews, ReviewRequest, ReviewSubmitted};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::notifications::NotificationKind;
use crate::state::requests::{Loader, RequestTicket};
use crate::utils::constants::{
    review_form_id, MSG_LOAD_REVIEWS_FAILED, MSG_REVIEW_FAILED, PROVIDER_RATING, PROVIDER_REVIEWS,
};
use crate::viewmodels::booking_viewmodel::BookingViewModel;
use crate::views;

#[derive(Clone)]
pub struct ReviewViewModel {
    api: ApiClient,
    state: AppState,
}

impl ReviewViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self { api, state }
    }

    /// `rating` y `comment` son los valores crudos de `#rating-{id}` y
    /// `#comment-{id}`
    pub async fn submit_review(&self, booking_id: i64, rating: &str, comment: &str) {
        let request = match ReviewRequest::from_form(booking_id, rating, comment) {
            Ok(r) => r,
            Err(message) => {
                self.state.notify(&message, NotificationKind::Error);
                return;
            }
        };
        log::info!("⭐ [REVIEWS] Enviando reseña de la reserva {} ({})", booking_id, request.rating);
        let result = self.api.submit_review(&request).await;
        self.apply_review_submitted(&request, result);
    }

    pub fn apply_review_submitted(&self, request: &ReviewRequest, result: Result<ReviewSubmitted, ApiError>) {
        let submitted = match result {
            Ok(s) => s,
            Err(e) => {
                self.state.report_error("REVIEWS", &e, MSG_REVIEW_FAILED);
                return;
            }
        };

        let provider = submitted.provider.as_deref().unwrap_or("the provider");
        self.state.notify(
            &format!("Thank you for reviewing {}!", provider),
            NotificationKind::Success,
        );

        let stars = submitted
            .rating
            .map(|r| r.clamp(0, 5) as u8)
            .unwrap_or(request.rating);
        self.state.reviewed.borrow_mut().insert(request.booking_id, stars);

        // Con la lista en estado se re-renderiza entera; si no, solo el
        // envoltorio del formulario
        let bookings = BookingViewModel::new(self.api.clone(), self.state.clone());
        if !bookings.render_user_bookings() {
            let selector = format!("#{}", review_form_id(request.booking_id));
            let nodes: Vec<VNode> = vec![views::review_submitted(stars)];
            self.state.page.commit(&selector, nodes);
        }
    }

    pub async fn load_provider_reviews(&self, provider_id: &str) {
        let ticket = self.state.begin_request(Loader::ProviderReviews);
        log::info!("⭐ [REVIEWS] Cargando reseñas del proveedor {}", provider_id);
        let result = self.api.get_provider_reviews(provider_id).await;
        self.apply_provider_reviews(ticket, result);
    }

    pub fn apply_provider_reviews(&self, ticket: RequestTicket, result: Result<ProviderReviews, ApiError>) {
        if !self.state.is_current(&ticket) {
            return;
        }
        match result {
            Ok(reviews) => {
                log::info!("✅ [REVIEWS] {} reseñas recibidas", reviews.reviews.len());
                self.state
                    .page
                    .commit(PROVIDER_RATING, views::render_rating_summary(&reviews));
                self.state
                    .page
                    .commit(PROVIDER_REVIEWS, views::render_reviews(&reviews));
            }
            Err(e) => self.state.report_error("REVIEWS", &e, MSG_LOAD_REVIEWS_FAILED),
        }
    }
}
