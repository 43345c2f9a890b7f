use gumdrop::Options;
use httpmock::MockServer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use goose::config::GooseConfiguration;
use goose::goose::Scenario;
use goose::metrics::GooseMetrics;
use goose::GooseAttack;

use hotel_loadtest::hooks::{RequestEvent, RequestListener, RunHooks, StopListener};

/// Not all functions are used by all tests, so we enable allow(dead_code) to avoid
/// compiler warnings during testing.

/// The following options are configured by default, if not set to a custom value:
///  --host <mock-server>
///  --users 1
///  --hatch-rate 1
///  --run-time 1 (unless --iterations is set)
///  --co-mitigation disabled
///  --quiet
#[allow(dead_code)]
pub fn build_configuration(server: &MockServer, custom: Vec<&str>) -> GooseConfiguration {
    let server_url = server.base_url();
    build_configuration_for_host(&server_url, custom)
}

/// Same as `build_configuration`, against an arbitrary host.
#[allow(dead_code)]
pub fn build_configuration_for_host<'a>(host: &'a str, custom: Vec<&'a str>) -> GooseConfiguration {
    // Start with the custom options.
    let mut configuration: Vec<&str> = custom;

    if !configuration.contains(&"--host") {
        configuration.extend_from_slice(&["--host", host]);
    }

    if !configuration.contains(&"--users") {
        configuration.extend_from_slice(&["--users", "1"]);
    }

    if !configuration.contains(&"--hatch-rate") {
        configuration.extend_from_slice(&["--hatch-rate", "1"]);
    }

    // The --run-time option can't be combined with --iterations.
    if !configuration.contains(&"--run-time") && !configuration.contains(&"--iterations") {
        configuration.extend_from_slice(&["--run-time", "1"]);
    }

    if !configuration.contains(&"--co-mitigation") {
        configuration.extend_from_slice(&["--co-mitigation", "disabled"]);
    }

    // Disable verbose output when running tests.
    configuration.extend_from_slice(&["--quiet"]);

    GooseConfiguration::parse_args_default(&configuration)
        .expect("failed to parse options and generate a configuration")
}

/// Create a GooseAttack from the configuration, the scenarios, and the test_stop
/// transaction of `hooks`.
#[allow(dead_code)]
pub fn build_load_test(
    configuration: GooseConfiguration,
    scenarios: Vec<Scenario>,
    hooks: &Arc<RunHooks>,
) -> GooseAttack {
    let mut goose = GooseAttack::initialize_with_config(configuration).unwrap();

    for scenario in scenarios {
        goose = goose.register_scenario(scenario);
    }

    goose.test_stop(hotel_loadtest::hooks::stop_transaction(hooks))
}

/// Run the actual load test, returning the GooseMetrics.
pub async fn run_load_test(goose_attack: GooseAttack) -> GooseMetrics {
    goose_attack.execute().await.unwrap()
}

/// Keeps every request event and counts stop notifications.
#[allow(dead_code)]
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<RequestEvent>>,
    stops: AtomicUsize,
}

#[allow(dead_code)]
impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Recorder::default())
    }

    /// Hooks reporting to this recorder only.
    pub fn hooks(self: &Arc<Self>) -> Arc<RunHooks> {
        Arc::new(
            RunHooks::new()
                .on_request(self.clone())
                .on_test_stop(self.clone()),
        )
    }

    pub fn events(&self) -> Vec<RequestEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl RequestListener for Recorder {
    fn on_request(&self, event: &RequestEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

impl StopListener for Recorder {
    fn on_test_stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}
