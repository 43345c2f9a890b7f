//! Per-user state of a regular user.
//!
//! Each [`GooseUser`](goose::goose::GooseUser) running the regular profile owns one
//! [`ReservationSession`] as its session data. Nothing here is shared between users.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::{CHAMBRE_IDS, CLIENT_IDS};

/// Identifier pools a user books with, and the reservations it created so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationSession {
    client_ids: Vec<i64>,
    chambre_ids: Vec<i64>,
    created_reservation_ids: Vec<i64>,
}

impl Default for ReservationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationSession {
    pub fn new() -> Self {
        ReservationSession {
            client_ids: CLIENT_IDS.collect(),
            chambre_ids: CHAMBRE_IDS.collect(),
            created_reservation_ids: Vec::new(),
        }
    }

    #[cfg(test)]
    fn client_ids(&self) -> &[i64] {
        &self.client_ids
    }

    #[cfg(test)]
    fn chambre_ids(&self) -> &[i64] {
        &self.chambre_ids
    }

    /// Reservations created by this user and not yet deleted, oldest first.
    pub fn created_ids(&self) -> &[i64] {
        &self.created_reservation_ids
    }

    pub fn choose_client_id<R: Rng>(&self, rng: &mut R) -> i64 {
        self.client_ids[rng.random_range(0..self.client_ids.len())]
    }

    pub fn choose_chambre_id<R: Rng>(&self, rng: &mut R) -> i64 {
        self.chambre_ids[rng.random_range(0..self.chambre_ids.len())]
    }

    /// Any reservation this user created, or `None` before the first successful create.
    pub fn choose_created_id<R: Rng>(&self, rng: &mut R) -> Option<i64> {
        self.created_reservation_ids.choose(rng).copied()
    }

    /// Record the id returned by a successful create.
    pub fn remember(&mut self, reservation_id: i64) {
        self.created_reservation_ids.push(reservation_id);
    }

    /// Take back the most recently created reservation.
    pub fn pop_latest(&mut self) -> Option<i64> {
        self.created_reservation_ids.pop()
    }
}
