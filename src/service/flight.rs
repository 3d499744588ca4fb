use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    config::RosterConfig,
    data::{
        aircraft_type::AircraftTypeRepository,
        airport::AirportRepository,
        flight::{FlightRepository, NewFlight},
    },
    error::AppError,
    model::{
        flight::{CreateFlightParams, Flight},
        roster::RosterResult,
    },
    service::roster::RosterService,
    util::geo,
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
    roster_config: RosterConfig,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection, roster_config: RosterConfig) -> Self {
        Self { db, roster_config }
    }

    /// Creates a new flight
    ///
    /// Distance is the great-circle distance between the airports and duration follows
    /// from cruise speed. The aircraft type's standard menu becomes the flight menu.
    /// The flight and its menu are stored in one transaction. When `create_roster` is
    /// set, automatic roster assignment runs after that commit; its failure does not undo
    /// the flight.
    ///
    /// # Arguments
    /// - `params`: Flight creation data
    ///
    /// # Returns
    /// - `Ok((Flight, Option<RosterResult>))`: The created flight and the roster outcome
    ///   if one was requested
    /// - `Err(AppError::BadRequest)`: Unknown airport or aircraft type, or empty airline code
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateFlightParams,
    ) -> Result<(Flight, Option<RosterResult>), AppError> {
        let airline_code = params.airline_code.trim().to_uppercase();
        if airline_code.is_empty() {
            return Err(AppError::BadRequest("Airline code is required".to_string()));
        }

        let airports = AirportRepository::new(self.db);
        let source = airports
            .get_by_id(params.source_airport_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid source airport".to_string()))?;
        let destination = airports
            .get_by_id(params.destination_airport_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid destination airport".to_string()))?;

        let aircraft_types = AircraftTypeRepository::new(self.db);
        let aircraft_type = aircraft_types
            .get_by_id(params.aircraft_type_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid aircraft type".to_string()))?;

        let distance_km = geo::great_circle_distance_km(
            (source.latitude, source.longitude),
            (destination.latitude, destination.longitude),
        );

        let menu = aircraft_types.standard_menu(aircraft_type.id).await?;
        let new_flight = NewFlight {
            airline_code,
            departure_time: params.departure_time,
            duration_minutes: geo::flight_duration_minutes(distance_km),
            distance_km,
            aircraft_type_id: aircraft_type.id,
            source_airport_id: Some(source.id),
            destination_airport_id: Some(destination.id),
        };

        let txn = self.db.begin().await?;
        let flight = match Self::insert_with_menu(&txn, new_flight, menu).await {
            Ok(flight) => flight,
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(error = %rollback_err, "Flight creation rollback failed");
                }
                return Err(err.into());
            }
        };
        txn.commit().await?;

        tracing::info!(
            flight_id = flight.id,
            from = %source.code,
            to = %destination.code,
            distance_km,
            "Flight created"
        );

        let roster = if params.create_roster {
            let mut roster_service = RosterService::new(self.db, self.roster_config.clone());
            Some(
                roster_service
                    .assign_roster_automatically(flight.id, flight.aircraft_type_id)
                    .await,
            )
        } else {
            None
        };

        Ok((Flight::from_entity(flight), roster))
    }

    /// Stores the flight row followed by its menu in order.
    async fn insert_with_menu<C: ConnectionTrait>(
        db: &C,
        flight: NewFlight,
        menu: Vec<String>,
    ) -> Result<entity::flight::Model, DbErr> {
        let repo = FlightRepository::new(db);
        let flight = repo.create(flight).await?;
        for dish in menu {
            repo.append_menu_item(flight.id, dish).await?;
        }
        Ok(flight)
    }
}
