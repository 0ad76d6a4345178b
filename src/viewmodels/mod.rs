pub mod session_viewmodel;
pub mod booking_viewmodel;
pub mod payment_viewmodel;
pub mod service_viewmodel;
pub mod review_viewmodel;
pub mod earnings_viewmodel;
pub mod admin_viewmodel;
pub mod form_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use booking_viewmodel::BookingViewModel;
pub use payment_viewmodel::PaymentViewModel;
pub use service_viewmodel::ServiceViewModel;
pub use review_viewmodel::ReviewViewModel;
pub use earnings_viewmodel::EarningsViewModel;
pub use admin_viewmodel::AdminViewModel;
