// ============================================================================
// VIEWS - Funciones puras datos → Vec<VNode> (sin lógica ni acceso al DOM)
// ============================================================================

pub mod shared;
pub mod notifications;
pub mod dialog;
pub mod bookings;
pub mod payments;
pub mod services;
pub mod reviews;
pub mod earnings;
pub mod providers;
pub mod header;

pub use bookings::{render_admin_bookings, render_user_bookings, review_submitted};
pub use payments::{render_payment_history, render_user_payments};
pub use services::{render_service_cards, render_service_options};
pub use reviews::{render_rating_summary, render_reviews};
pub use earnings::render_amount;
pub use providers::render_pending_providers;
pub use header::{render_notification_badge, render_user_name};
