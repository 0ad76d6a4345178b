pub mod lenient;
pub mod booking;
pub mod payment;
pub mod service;
pub mod review;
pub mod earnings;
pub mod provider;
pub mod session;

pub use booking::{Booking, BookingStatus, NewBooking, CancelRequest};
pub use payment::{Payment, PaymentRequest};
pub use service::{Service, NewService};
pub use review::{Review, ProviderReviews, ReviewRequest, ReviewSubmitted};
pub use earnings::{ProviderEarnings, PaymentHistory};
pub use provider::{PendingProvider, Availability};
pub use session::{UserProfile, NotificationCount};
