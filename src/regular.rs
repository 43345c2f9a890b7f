//! The regular user: browses reservations, rooms and clients, and books, edits and
//! cancels its own reservations.

use std::sync::Arc;

use chrono::Local;
use goose::prelude::*;
use rand::Rng;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::{ProfileSettings, LOOKUP_RESERVATION_IDS};
use crate::hooks::RunHooks;
use crate::payload::{parse_created_id, ReservationPayload, StayDates};
use crate::request;
use crate::session::ReservationSession;
use crate::status::{settle, Expected};

pub const SCENARIO_NAME: &str = "Regular user";

const RESERVATIONS: &str = "/api/reservations";
const RESERVATION_BY_ID: &str = "/api/reservations/{id}";
const RESERVATIONS_BY_CLIENT: &str = "/api/reservations/client/{clientId}";
const AVAILABILITY: &str = "/api/reservations/availability";
const AVAILABLE_ROOMS: &str = "/api/chambres/available";
const CLIENTS: &str = "/api/clients";

/// Everything a regular user does, each picked with probability proportional to its
/// weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum RegularTask {
    GetAllReservations,
    GetReservationById,
    CreateReservation,
    GetReservationsByClient,
    GetAvailableRooms,
    GetAllClients,
    UpdateReservation,
    DeleteReservation,
    CheckRoomAvailability,
}

impl RegularTask {
    pub fn name(self) -> &'static str {
        match self {
            RegularTask::GetAllReservations => "get_all_reservations",
            RegularTask::GetReservationById => "get_reservation_by_id",
            RegularTask::CreateReservation => "create_reservation",
            RegularTask::GetReservationsByClient => "get_reservations_by_client",
            RegularTask::GetAvailableRooms => "get_available_rooms",
            RegularTask::GetAllClients => "get_all_clients",
            RegularTask::UpdateReservation => "update_reservation",
            RegularTask::DeleteReservation => "delete_reservation",
            RegularTask::CheckRoomAvailability => "check_room_availability",
        }
    }

    pub fn weight(self) -> usize {
        match self {
            RegularTask::GetAllReservations => 5,
            RegularTask::GetReservationById => 3,
            RegularTask::CreateReservation
            | RegularTask::GetReservationsByClient
            | RegularTask::GetAvailableRooms
            | RegularTask::GetAllClients => 2,
            RegularTask::UpdateReservation
            | RegularTask::DeleteReservation
            | RegularTask::CheckRoomAvailability => 1,
        }
    }

    pub async fn run(self, user: &mut GooseUser, hooks: &RunHooks) -> TransactionResult {
        match self {
            RegularTask::GetAllReservations => {
                fetch(user, hooks, RESERVATIONS, RESERVATIONS, Expected::OK).await
            }
            RegularTask::GetReservationById => {
                let reservation_id = rand::rng().random_range(LOOKUP_RESERVATION_IDS);
                let path = format!("{}/{}", RESERVATIONS, reservation_id);
                fetch(
                    user,
                    hooks,
                    &path,
                    RESERVATION_BY_ID,
                    Expected::FOUND_OR_MISSING,
                )
                .await
            }
            RegularTask::CreateReservation => create_reservation(user, hooks).await,
            RegularTask::GetReservationsByClient => {
                let client_id = session_mut(user).choose_client_id(&mut rand::rng());
                let path = format!("{}/client/{}", RESERVATIONS, client_id);
                fetch(user, hooks, &path, RESERVATIONS_BY_CLIENT, Expected::OK).await
            }
            RegularTask::GetAvailableRooms => {
                fetch(user, hooks, AVAILABLE_ROOMS, AVAILABLE_ROOMS, Expected::OK).await
            }
            RegularTask::GetAllClients => fetch(user, hooks, CLIENTS, CLIENTS, Expected::OK).await,
            RegularTask::UpdateReservation => update_reservation(user, hooks).await,
            RegularTask::DeleteReservation => delete_reservation(user, hooks).await,
            RegularTask::CheckRoomAvailability => check_room_availability(user, hooks).await,
        }
    }

    /// Wrap this task in a goose transaction reporting to `hooks`.
    pub fn transaction(self, hooks: &Arc<RunHooks>) -> Result<Transaction, GooseError> {
        let hooks = Arc::clone(hooks);
        let closure: TransactionFunction = Arc::new(move |user| {
            let hooks = Arc::clone(&hooks);
            Box::pin(async move { self.run(user, &hooks).await })
        });

        Transaction::new(closure)
            .set_name(self.name())
            .set_weight(self.weight())
    }
}

/// Build the regular user scenario: a fresh [`ReservationSession`] on start, then
/// every [`RegularTask`] at its weight.
pub fn scenario(hooks: &Arc<RunHooks>, settings: &ProfileSettings) -> Result<Scenario, GooseError> {
    let mut scenario = scenario!(SCENARIO_NAME)
        .set_weight(settings.weight)?
        .set_wait_time(settings.min_wait, settings.max_wait)?
        .register_transaction(
            transaction!(start_session)
                .set_on_start()
                .set_name("start_session"),
        );

    for task in RegularTask::iter() {
        scenario = scenario.register_transaction(task.transaction(hooks)?);
    }

    Ok(scenario)
}

/// Give the user an empty [`ReservationSession`].
pub async fn start_session(user: &mut GooseUser) -> TransactionResult {
    trace!("user {} starting reservation session", user.weighted_users_index);
    user.set_session_data(ReservationSession::new());

    Ok(())
}

/// The user's session, created on first use if `start_session` did not run.
fn session_mut(user: &mut GooseUser) -> &mut ReservationSession {
    if user.get_session_data::<ReservationSession>().is_none() {
        user.set_session_data(ReservationSession::new());
    }
    user.get_session_data_unchecked_mut::<ReservationSession>()
}

async fn fetch(
    user: &mut GooseUser,
    hooks: &RunHooks,
    path: &str,
    name: &str,
    expected: Expected,
) -> TransactionResult {
    let mut goose = request::send(user, hooks, request::get(path, name)).await?;

    settle(user, &mut goose.request, expected)
}

async fn create_reservation(user: &mut GooseUser, hooks: &RunHooks) -> TransactionResult {
    let payload = ReservationPayload::creation(
        session_mut(user),
        Local::now().naive_local(),
        &mut rand::rng(),
    );
    let goose_request =
        request::json(user, GooseMethod::Post, RESERVATIONS, RESERVATIONS, &payload)?;
    let mut goose = request::send(user, hooks, goose_request).await?;

    if goose.request.status_code == 201 {
        if let Ok(response) = goose.response {
            match response.text().await {
                Ok(body) => match parse_created_id(&body) {
                    Ok(Some(reservation_id)) => session_mut(user).remember(reservation_id),
                    Ok(None) => debug!("created reservation without an id: {}", body),
                    Err(e) => debug!("unreadable creation response: {}: {}", e, body),
                },
                Err(e) => debug!("failed to read creation response: {}", e),
            }
        }
    }

    settle(user, &mut goose.request, Expected::CREATED_OR_REJECTED)
}

async fn update_reservation(user: &mut GooseUser, hooks: &RunHooks) -> TransactionResult {
    let planned = {
        let rng = &mut rand::rng();
        let session = session_mut(user);
        session.choose_created_id(rng).map(|reservation_id| {
            let payload = ReservationPayload::update(session, Local::now().naive_local(), rng);
            (reservation_id, payload)
        })
    };
    let (reservation_id, payload) = match planned {
        Some(planned) => planned,
        None => {
            trace!("no reservation to update yet");
            return Ok(());
        }
    };

    let path = format!("{}/{}", RESERVATIONS, reservation_id);
    let goose_request = request::json(user, GooseMethod::Put, &path, RESERVATION_BY_ID, &payload)?;
    let mut goose = request::send(user, hooks, goose_request).await?;

    settle(user, &mut goose.request, Expected::UPDATED_REJECTED_OR_MISSING)
}

async fn delete_reservation(user: &mut GooseUser, hooks: &RunHooks) -> TransactionResult {
    let reservation_id = match session_mut(user).pop_latest() {
        Some(reservation_id) => reservation_id,
        None => {
            trace!("no reservation to delete");
            return Ok(());
        }
    };

    let path = format!("{}/{}", RESERVATIONS, reservation_id);
    let mut goose = request::send(user, hooks, request::delete(&path, RESERVATION_BY_ID)).await?;

    settle(user, &mut goose.request, Expected::DELETED_OR_MISSING)
}

async fn check_room_availability(user: &mut GooseUser, hooks: &RunHooks) -> TransactionResult {
    let (chambre_id, dates) = {
        let rng = &mut rand::rng();
        let chambre_id = session_mut(user).choose_chambre_id(rng);
        (chambre_id, StayDates::random(Local::now().date_naive(), rng))
    };

    let request_builder = user
        .get_request_builder(&GooseMethod::Get, AVAILABILITY)?
        .query(&[
            ("chambreId", chambre_id.to_string()),
            ("dateDebut", dates.start.to_string()),
            ("dateFin", dates.end.to_string()),
        ]);
    let goose_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .name(AVAILABILITY)
        .build();
    let mut goose = request::send(user, hooks, goose_request).await?;

    settle(user, &mut goose.request, Expected::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        let weights: Vec<(&str, usize)> = RegularTask::iter()
            .map(|task| (task.name(), task.weight()))
            .collect();
        assert_eq!(
            weights,
            vec![
                ("get_all_reservations", 5),
                ("get_reservation_by_id", 3),
                ("create_reservation", 2),
                ("get_reservations_by_client", 2),
                ("get_available_rooms", 2),
                ("get_all_clients", 2),
                ("update_reservation", 1),
                ("delete_reservation", 1),
                ("check_room_availability", 1),
            ]
        );
        assert_eq!(weights.iter().map(|(_, weight)| weight).sum::<usize>(), 19);
    }

    #[test]
    fn transactions_carry_name_and_weight() {
        let hooks = Arc::new(RunHooks::new());
        for task in RegularTask::iter() {
            let transaction = task.transaction(&hooks).unwrap();
            assert_eq!(transaction.name, task.name());
            assert_eq!(transaction.weight, task.weight());
        }
    }

    #[test]
    fn scenario_registers_every_task() {
        let hooks = Arc::new(RunHooks::new());
        let scenario = scenario(&hooks, &ProfileSettings::regular()).unwrap();
        assert_eq!(scenario.name, SCENARIO_NAME);
        assert_eq!(scenario.weight, 1);
        // start_session plus nine tasks.
        assert_eq!(scenario.transactions.len(), 10);
        assert!(scenario.transactions[0].on_start);
        assert!(scenario.transactions[1..].iter().all(|t| !t.on_start));
    }

    #[test]
    fn invalid_wait_is_rejected() {
        let hooks = Arc::new(RunHooks::new());
        let mut settings = ProfileSettings::regular();
        settings.min_wait = settings.max_wait * 2;
        assert!(scenario(&hooks, &settings).is_err());
    }
}
