//! Everything needed to assemble and customize the hotel load test.
//!
//! ```rust
//! use hotel_loadtest::prelude::*;
//! ```

pub use crate::admin::AdminTask;
pub use crate::config::{ProfileSettings, DEFAULT_HOST};
pub use crate::hooks::{
    RequestEvent, RequestListener, RequestLogger, RunHooks, StopListener, SummaryPrinter,
};
pub use crate::regular::RegularTask;
pub use crate::session::ReservationSession;
pub use crate::status::Expected;
pub use crate::HotelLoadTest;
