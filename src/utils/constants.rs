// ============================================================================
// CONSTANTS - Selectores de regiones/landmarks y mensajes fijos
// ============================================================================

// Regiones que los loaders re-renderizan por completo
pub const USER_BOOKINGS: &str = "#user-bookings";
pub const ADMIN_BOOKINGS: &str = "#admin-bookings";
pub const PAYMENTS_TABLE_BODY: &str = "#payments-table-body";
pub const SERVICES_LIST: &str = "#services-list";
pub const SERVICE_SELECT: &str = "#service-select";
pub const PROVIDER_REVIEWS: &str = "#provider-reviews";
pub const PROVIDER_RATING: &str = "#provider-rating";
pub const TOTAL_EARNINGS: &str = "#total-earnings";
pub const MONTH_EARNINGS: &str = "#month-earnings";
pub const PENDING_PAYMENTS: &str = "#pending-payments";
pub const PAYMENT_HISTORY_BODY: &str = "#payment-history-table tbody";
pub const PENDING_PROVIDERS: &str = "#pending-providers";
pub const NOTIFICATION_COUNT: &str = "#notification-count";
pub const USER_NAME: &str = "#user-name";

// Contenedores que crea la app al arrancar
pub const NOTIFICATION_STACK_ID: &str = "notification-stack";
pub const NOTIFICATION_STACK: &str = "#notification-stack";
pub const DIALOG_ROOT_ID: &str = "dialog-root";
pub const DIALOG_ROOT: &str = "#dialog-root";
pub const MAIN_CONTAINER: &str = ".container";

// Landmarks sin región propia
pub const PROVIDER_DASHBOARD_ID: &str = "provider-dashboard";
pub const REFRESH_EARNINGS_ID: &str = "refresh-earnings";
pub const CREATE_SERVICE_FORM_ID: &str = "create-service-form";
pub const NEW_SERVICE_NAME_ID: &str = "new-service-name";
pub const NEW_SERVICE_DESCRIPTION_ID: &str = "new-service-description";
pub const NEW_SERVICE_PRICE_ID: &str = "new-service-price";
pub const MARK_NOTIFICATIONS_READ_ID: &str = "mark-notifications-read";

// Ids por reserva
pub fn review_form_id(booking_id: i64) -> String {
    format!("review-form-{}", booking_id)
}

pub fn rating_input_id(booking_id: i64) -> String {
    format!("rating-{}", booking_id)
}

pub fn comment_input_id(booking_id: i64) -> String {
    format!("comment-{}", booking_id)
}

pub const INVALID_CLASS: &str = "is-invalid";
pub const DEFAULT_PAYMENT_METHOD: &str = "Credit Card";

// Mensajes genéricos de fallo de transporte
pub const MSG_LOAD_BOOKINGS_FAILED: &str = "Failed to load bookings";
pub const MSG_LOAD_PAYMENTS_FAILED: &str = "Failed to load payments. Please try again.";
pub const MSG_LOAD_SERVICES_FAILED: &str = "Failed to load services";
pub const MSG_LOAD_REVIEWS_FAILED: &str = "Failed to load reviews";
pub const MSG_LOAD_EARNINGS_FAILED: &str = "Failed to load earnings data";
pub const MSG_LOAD_HISTORY_FAILED: &str = "Failed to load payment history";
pub const MSG_LOAD_PROVIDERS_FAILED: &str = "Failed to load pending providers";
pub const MSG_CANCEL_FAILED: &str = "Failed to cancel booking. Please try again.";
pub const MSG_CONFIRM_FAILED: &str = "Error confirming booking";
pub const MSG_APPROVE_FAILED: &str = "Error approving service provider";
pub const MSG_REJECT_FAILED: &str = "Error rejecting service provider";
pub const MSG_BOOKING_FAILED: &str = "Failed to create booking. Please try again.";
pub const MSG_SERVICE_FAILED: &str = "Failed to create service. Please try again.";
pub const MSG_PAYMENT_FAILED: &str = "Failed to process payment. Please try again.";
pub const MSG_REVIEW_FAILED: &str = "Failed to submit review. Please try again.";
pub const MSG_PAST_DATE: &str = "Please select a future date and time";
pub const MSG_PROVIDER_UNAVAILABLE: &str =
    "The provider is not available at the selected date and time";
