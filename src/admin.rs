//! The admin user: reads lists only. Status classification is left to goose, so any
//! non-2xx response counts as a failure.

use std::sync::Arc;

use goose::prelude::*;
use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::{ProfileSettings, RESERVATION_STATUSES};
use crate::hooks::RunHooks;
use crate::request;

pub const SCENARIO_NAME: &str = "Admin user";

const RESERVATIONS: &str = "/api/reservations";
const RESERVATIONS_BY_STATUS: &str = "/api/reservations/status/{status}";
const CLIENTS: &str = "/api/clients";
const ROOMS: &str = "/api/chambres";

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum AdminTask {
    GetAllReservations,
    GetAllClients,
    GetAllRooms,
    GetReservationsByStatus,
}

impl AdminTask {
    pub fn name(self) -> &'static str {
        match self {
            AdminTask::GetAllReservations => "admin_get_all_reservations",
            AdminTask::GetAllClients => "admin_get_all_clients",
            AdminTask::GetAllRooms => "admin_get_all_rooms",
            AdminTask::GetReservationsByStatus => "admin_get_reservations_by_status",
        }
    }

    pub fn weight(self) -> usize {
        match self {
            AdminTask::GetAllReservations => 3,
            AdminTask::GetAllClients | AdminTask::GetAllRooms => 2,
            AdminTask::GetReservationsByStatus => 1,
        }
    }

    pub async fn run(self, user: &mut GooseUser, hooks: &RunHooks) -> TransactionResult {
        let path = match self {
            AdminTask::GetAllReservations => RESERVATIONS.to_string(),
            AdminTask::GetAllClients => CLIENTS.to_string(),
            AdminTask::GetAllRooms => ROOMS.to_string(),
            AdminTask::GetReservationsByStatus => {
                format!("{}/status/{}", RESERVATIONS, random_status())
            }
        };
        let _goose = request::send(user, hooks, request::get(&path, self.request_name())).await?;

        Ok(())
    }

    fn request_name(self) -> &'static str {
        match self {
            AdminTask::GetAllReservations => RESERVATIONS,
            AdminTask::GetAllClients => CLIENTS,
            AdminTask::GetAllRooms => ROOMS,
            AdminTask::GetReservationsByStatus => RESERVATIONS_BY_STATUS,
        }
    }

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

fn random_status() -> &'static str {
    RESERVATION_STATUSES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(RESERVATION_STATUSES[0])
}

pub fn scenario(hooks: &Arc<RunHooks>, settings: &ProfileSettings) -> Result<Scenario, GooseError> {
    let mut scenario = scenario!(SCENARIO_NAME)
        .set_weight(settings.weight)?
        .set_wait_time(settings.min_wait, settings.max_wait)?;

    for task in AdminTask::iter() {
        scenario = scenario.register_transaction(task.transaction(hooks)?);
    }

    Ok(scenario)
}
