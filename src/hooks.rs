//! Listeners attached to a load test run.
//!
//! goose has no request or shutdown events of its own, so the load test carries a
//! [`RunHooks`] value: every request sent through [`request::send`](crate::request::send)
//! is reported to the request listeners, and the stop listeners run once from the
//! goose `test_stop` transaction. The hooks are built by the caller and handed to
//! [`HotelLoadTest`](crate::HotelLoadTest), so they live exactly as long as the run
//! they are registered on.

use std::fmt;
use std::sync::Arc;

use goose::goose::GooseResponse;
use goose::prelude::*;

/// What a request listener learns about a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestEvent {
    pub method: GooseMethod,
    /// Request name, e.g. `/api/reservations/{id}`.
    pub name: String,
    /// HTTP status, or 0 if no response was received.
    pub status_code: u16,
    /// Milliseconds.
    pub response_time: u64,
    /// Transport-level error (connection refused, timeout, ...).
    pub error: Option<String>,
}

impl RequestEvent {
    pub fn from_response(goose: &GooseResponse) -> Self {
        RequestEvent {
            method: goose.request.raw.method.clone(),
            name: goose.request.name.clone(),
            status_code: goose.request.status_code,
            response_time: goose.request.response_time,
            error: goose.response.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Invoked after every request, successful or not.
pub trait RequestListener: Send + Sync {
    fn on_request(&self, event: &RequestEvent);
}

/// Invoked once when the load test stops.
pub trait StopListener: Send + Sync {
    fn on_test_stop(&self);
}

/// The listeners of one load test run.
#[derive(Clone, Default)]
pub struct RunHooks {
    request_listeners: Vec<Arc<dyn RequestListener>>,
    stop_listeners: Vec<Arc<dyn StopListener>>,
}

impl RunHooks {
    /// No listeners.
    pub fn new() -> Self {
        RunHooks::default()
    }

    /// [`RequestLogger`] and [`SummaryPrinter`].
    pub fn standard() -> Self {
        RunHooks::new()
            .on_request(Arc::new(RequestLogger))
            .on_test_stop(Arc::new(SummaryPrinter))
    }

    pub fn on_request(mut self, listener: Arc<dyn RequestListener>) -> Self {
        self.request_listeners.push(listener);
        self
    }

    pub fn on_test_stop(mut self, listener: Arc<dyn StopListener>) -> Self {
        self.stop_listeners.push(listener);
        self
    }

    pub fn request_completed(&self, event: &RequestEvent) {
        for listener in &self.request_listeners {
            listener.on_request(event);
        }
    }

    pub fn test_stopped(&self) {
        trace!("notifying {} stop listeners", self.stop_listeners.len());
        for listener in &self.stop_listeners {
            listener.on_test_stop();
        }
    }
}

impl fmt::Debug for RunHooks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RunHooks")
            .field("request_listeners", &self.request_listeners.len())
            .field("stop_listeners", &self.stop_listeners.len())
            .finish()
    }
}

/// Build the goose `test_stop` transaction that notifies the stop listeners.
pub fn stop_transaction(hooks: &Arc<RunHooks>) -> Transaction {
    let hooks = Arc::clone(hooks);
    let closure: TransactionFunction = Arc::new(move |_user| {
        let hooks = Arc::clone(&hooks);
        Box::pin(async move {
            hooks.test_stopped();

            Ok(())
        })
    });

    Transaction::new(closure).set_name("test stop")
}

/// Logs requests that never got a response.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLogger;

impl RequestLogger {
    /// The diagnostic line for `event`, if it failed at the transport level.
    pub fn describe(event: &RequestEvent) -> Option<String> {
        event
            .error
            .as_ref()
            .map(|error| format!("Request failed: {} - {}", event.name, error))
    }
}

impl RequestListener for RequestLogger {
    fn on_request(&self, event: &RequestEvent) {
        if let Some(line) = RequestLogger::describe(event) {
            warn!("{}", line);
        }
    }
}

/// Prints a closing banner when the load test stops. goose prints the metrics.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryPrinter;

impl SummaryPrinter {
    pub fn banner() -> String {
        let rule = "=".repeat(50);
        format!("\n{}\nLoad Test Completed\n{}", rule, rule)
    }
}

impl StopListener for SummaryPrinter {
    fn on_test_stop(&self) {
        println!("{}", SummaryPrinter::banner());
    }
}
