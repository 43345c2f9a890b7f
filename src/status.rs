//! Pass/fail classification by HTTP status code.
//!
//! goose counts any 2xx response as a success. The hotel API answers some requests
//! with 400 or 404 as a normal part of the workload (a room already booked, a
//! reservation another user deleted), so every regular-user task declares the exact
//! statuses it accepts and [`settle`] overrides goose's verdict accordingly.

use goose::metrics::GooseRequestMetric;
use goose::prelude::*;

/// The statuses a task treats as success. Anything else is a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expected(&'static [u16]);

impl Expected {
    pub const OK: Expected = Expected(&[200]);
    /// Lookups by id: the reservation may not exist.
    pub const FOUND_OR_MISSING: Expected = Expected(&[200, 404]);
    /// Creation: 400 is a business-rule rejection such as an unavailable room.
    pub const CREATED_OR_REJECTED: Expected = Expected(&[201, 400]);
    pub const UPDATED_REJECTED_OR_MISSING: Expected = Expected(&[200, 400, 404]);
    /// Deletion: 404 when the reservation is already gone.
    pub const DELETED_OR_MISSING: Expected = Expected(&[204, 404]);

    pub fn accepts(&self, status_code: u16) -> bool {
        self.0.contains(&status_code)
    }

    pub fn status_codes(&self) -> &'static [u16] {
        self.0
    }
}

/// Outcome of one request against an [`Expected`] set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    Accepted,
    /// The server answered with a status outside the whitelist.
    Rejected(u16),
    /// No response at all. goose records status code 0 in that case.
    NoResponse,
}

impl Verdict {
    pub(crate) fn of(expected: Expected, status_code: u16) -> Self {
        if status_code == 0 {
            Verdict::NoResponse
        } else if expected.accepts(status_code) {
            Verdict::Accepted
        } else {
            Verdict::Rejected(status_code)
        }
    }
}

/// Record the verdict for `request` with goose.
///
/// Accepted statuses are forced to success even when outside 2xx. Anything else is
/// marked as a failure, which also makes the transaction return an error; goose
/// counts it and the user keeps running.
pub fn settle(
    user: &GooseUser,
    request: &mut GooseRequestMetric,
    expected: Expected,
) -> TransactionResult {
    match Verdict::of(expected, request.status_code) {
        Verdict::Accepted => user.set_success(request),
        Verdict::Rejected(status_code) => {
            user.set_failure(&format!("Status: {}", status_code), request, None, None)
        }
        Verdict::NoResponse => {
            let tag = format!("{}: no response", request.name);
            user.set_failure(&tag, request, None, None)
        }
    }
}
