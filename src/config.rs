//! Tuning for the simulated users.
//!
//! Everything an operator changes between runs (host, number of users, hatch rate,
//! run time, log files) is a goose run-time option, parsed by
//! [`GooseAttack::initialize`](goose::GooseAttack::initialize). What lives here is
//! the shape of the simulated traffic itself: how often each profile is picked, how
//! long its users pause between tasks, and the identifier pools they draw from.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Host used when the load test is started without `--host`.
pub const DEFAULT_HOST: &str = "http://localhost:8080";

/// Clients seeded in the hotel database, used as `clientId`.
pub const CLIENT_IDS: RangeInclusive<i64> = 1..=10;

/// Rooms seeded in the hotel database, used as `chambreId`.
pub const CHAMBRE_IDS: RangeInclusive<i64> = 1..=10;

/// Reservation ids probed by single-resource lookups. Ids outside the seeded data
/// return 404, which is an expected outcome.
pub const LOOKUP_RESERVATION_IDS: RangeInclusive<i64> = 1..=8;

/// Reservation statuses an admin filters on.
pub const RESERVATION_STATUSES: [&str; 3] = ["EN_ATTENTE", "CONFIRMEE", "TERMINEE"];

/// How many days ahead of today a generated stay may start.
pub const START_OFFSET_DAYS: RangeInclusive<i64> = 1..=30;

/// How many nights a generated stay lasts.
pub const STAY_LENGTH_DAYS: RangeInclusive<i64> = 1..=7;

/// Guests on a generated reservation.
pub const GUESTS: RangeInclusive<u8> = 1..=4;

/// How a user profile is scheduled by goose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSettings {
    /// Relative frequency of this profile among all launched users.
    pub weight: usize,
    /// Shortest pause between two tasks of the same user.
    pub min_wait: Duration,
    /// Longest pause between two tasks of the same user.
    pub max_wait: Duration,
}

impl ProfileSettings {
    /// Customers browsing and booking: pause 1 to 3 seconds between tasks.
    pub fn regular() -> Self {
        ProfileSettings {
            weight: 1,
            min_wait: Duration::from_secs(1),
            max_wait: Duration::from_secs(3),
        }
    }

    /// Back-office staff reading lists: pause 2 to 5 seconds between tasks.
    pub fn admin() -> Self {
        ProfileSettings {
            weight: 1,
            min_wait: Duration::from_secs(2),
            max_wait: Duration::from_secs(5),
        }
    }

    /// Same weight, no pause between tasks.
    pub fn without_wait(mut self) -> Self {
        self.min_wait = Duration::ZERO;
        self.max_wait = Duration::ZERO;
        self
    }
}
