// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod action;
pub mod notifications;
pub mod requests;
pub mod dialog;
pub mod page;
pub mod app_state;

pub use action::{Action, DialogField};
pub use notifications::{Notification, NotificationCenter, NotificationKind};
pub use requests::{Loader, RequestTicket, RequestTracker};
pub use dialog::Dialog;
pub use page::Page;
pub use app_state::AppState;
