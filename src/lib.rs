//! # Hotel reservation load test
//!
//! A [Goose](https://docs.rs/goose/) load test for the hotel reservation REST API.
//! Two kinds of simulated users hit the API concurrently:
//!
//! - **Regular users** ([`regular`]) list and look up reservations, rooms and clients,
//!   check room availability, and create, update and delete their own reservations.
//!   Each task accepts a fixed set of status codes: a 404 on a lookup or a 400 on a
//!   booking is an expected answer, not an error.
//! - **Admin users** ([`admin`]) read reservation, client and room lists, and filter
//!   reservations by status.
//!
//! goose schedules the users, picks weighted tasks, sends the HTTP requests and
//! aggregates the metrics. This crate only describes the traffic.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release -- --host http://localhost:8080 --users 50 --hatch-rate 5 --run-time 5m
//! ```
//!
//! All goose run-time options are available; see `--help`. Without `--host`, the
//! load test targets [`DEFAULT_HOST`](config::DEFAULT_HOST).
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use goose::prelude::*;
//! use hotel_loadtest::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GooseError> {
//!     HotelLoadTest::new(RunHooks::standard())
//!         .register(GooseAttack::initialize()?)?
//!         .execute()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Listeners are plain values: add your own [`RequestListener`](hooks::RequestListener)
//! or [`StopListener`](hooks::StopListener) to the [`RunHooks`](hooks::RunHooks) before
//! handing them over.

#[macro_use]
extern crate log;

pub mod admin;
pub mod config;
pub mod hooks;
pub mod payload;
pub mod prelude;
pub mod regular;
pub mod request;
pub mod session;
pub mod status;

use std::sync::Arc;

use goose::prelude::*;

use crate::config::ProfileSettings;
use crate::hooks::RunHooks;

/// Both user profiles and the run hooks, ready to be registered on a [`GooseAttack`].
#[derive(Clone, Debug)]
pub struct HotelLoadTest {
    hooks: Arc<RunHooks>,
    regular: ProfileSettings,
    admin: ProfileSettings,
}

impl HotelLoadTest {
    pub fn new(hooks: RunHooks) -> Self {
        HotelLoadTest {
            hooks: Arc::new(hooks),
            regular: ProfileSettings::regular(),
            admin: ProfileSettings::admin(),
        }
    }

    /// Replace the scheduling of regular users.
    pub fn set_regular(mut self, settings: ProfileSettings) -> Self {
        self.regular = settings;
        self
    }

    /// Replace the scheduling of admin users.
    pub fn set_admin(mut self, settings: ProfileSettings) -> Self {
        self.admin = settings;
        self
    }

    pub fn hooks(&self) -> &Arc<RunHooks> {
        &self.hooks
    }

    /// The regular and admin scenarios, in that order.
    pub fn scenarios(&self) -> Result<Vec<Scenario>, GooseError> {
        Ok(vec![
            regular::scenario(&self.hooks, &self.regular)?,
            admin::scenario(&self.hooks, &self.admin)?,
        ])
    }

    /// Register both scenarios, plus a `test_stop` transaction that notifies the stop
    /// listeners.
    pub fn register(self, goose_attack: GooseAttack) -> Result<GooseAttack, GooseError> {
        let mut goose_attack = goose_attack;
        for scenario in self.scenarios()? {
            goose_attack = goose_attack.register_scenario(scenario);
        }
        debug!("registered load test with {:?}", self.hooks);

        Ok(goose_attack.test_stop(hooks::stop_transaction(&self.hooks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn scenarios_in_order() {
        let load_test = HotelLoadTest::new(RunHooks::new())
            .set_admin(ProfileSettings::admin().without_wait());
        let scenarios = load_test.scenarios().unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, regular::SCENARIO_NAME);
        assert_eq!(
            scenarios[0].transaction_wait,
            Some((Duration::from_secs(1), Duration::from_secs(3)))
        );
        assert_eq!(scenarios[1].name, admin::SCENARIO_NAME);
        assert_eq!(
            scenarios[1].transaction_wait,
            Some((Duration::ZERO, Duration::ZERO))
        );
    }

    #[test]
    fn hooks_are_shared() {
        let load_test = HotelLoadTest::new(RunHooks::standard());
        let hooks = Arc::clone(load_test.hooks());
        assert_eq!(Arc::strong_count(&hooks), 2);
        let _scenarios = load_test.scenarios().unwrap();
        // One clone per transaction closure: nine regular tasks, four admin tasks.
        assert_eq!(Arc::strong_count(&hooks), 2 + 9 + 4);
    }
}
