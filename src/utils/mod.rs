// Utils compartidos

pub mod clock;
pub mod constants;
pub mod format;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_currency, format_date, format_time, tomorrow_date};
pub use validation::{validate_date_time, validate_fields, RequiredField};
