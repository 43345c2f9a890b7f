//! Request bodies sent to `/api/reservations`, and the one response field read back.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GUESTS, START_OFFSET_DAYS, STAY_LENGTH_DAYS};
use crate::session::ReservationSession;

/// A stay that starts 1 to 30 days after `today` and lasts 1 to 7 nights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StayDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StayDates {
    /// Pick a random future stay relative to `today`.
    pub fn random<R: Rng>(today: NaiveDate, rng: &mut R) -> Self {
        let start = today + Duration::days(rng.random_range(START_OFFSET_DAYS));
        let end = start + Duration::days(rng.random_range(STAY_LENGTH_DAYS));
        StayDates { start, end }
    }

    /// Number of nights between arrival and departure.
    #[cfg(test)]
    fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// JSON body of `POST /api/reservations` and `PUT /api/reservations/{id}`.
///
/// Dates serialize as `YYYY-MM-DD`. `commentaires` is only sent on creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub client_id: i64,
    pub chambre_id: i64,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: String,
    pub nombre_personnes: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaires: Option<String>,
}

impl ReservationPayload {
    /// A new booking for a random client and room of `session`.
    pub fn creation<R: Rng>(
        session: &ReservationSession,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        let mut payload = Self::random(session, now, rng);
        payload.preferences = format!("Load test - {}", timestamp(now));
        payload.commentaires = Some("Created by load test".to_string());
        payload
    }

    /// Replacement values for an existing booking. Same date and occupancy rules as
    /// [`ReservationPayload::creation`], without `commentaires`.
    pub fn update<R: Rng>(
        session: &ReservationSession,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        let mut payload = Self::random(session, now, rng);
        payload.preferences = format!("Updated by load test - {}", timestamp(now));
        payload
    }

    fn random<R: Rng>(
        session: &ReservationSession,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        let client_id = session.choose_client_id(rng);
        let chambre_id = session.choose_chambre_id(rng);
        let dates = StayDates::random(now.date(), rng);
        ReservationPayload {
            client_id,
            chambre_id,
            date_debut: dates.start,
            date_fin: dates.end,
            preferences: String::new(),
            nombre_personnes: rng.random_range(GUESTS),
            commentaires: None,
        }
    }
}

fn timestamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// The part of a `201 Created` body the load test cares about.
#[derive(Debug, Deserialize)]
struct CreatedReservation {
    id: Option<i64>,
}

/// Extract the new reservation id from a creation response body.
///
/// Returns `Ok(None)` for valid JSON that carries no usable `id`.
pub fn parse_created_id(body: &str) -> Result<Option<i64>, serde_json::Error> {
    serde_json::from_str::<CreatedReservation>(body).map(|created| created.id)
}
