use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Field values for a new flight row.
#[derive(Debug, Clone)]
pub struct NewFlight {
    pub airline_code: String,
    pub departure_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub distance_km: f64,
    pub aircraft_type_id: i32,
    pub source_airport_id: Option<i32>,
    pub destination_airport_id: Option<i32>,
}

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new flight
    ///
    /// # Arguments
    /// - `flight`: Field values of the flight
    ///
    /// # Returns
    /// - `Ok(Model)`: The created flight
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, flight: NewFlight) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            airline_code: ActiveValue::Set(flight.airline_code),
            departure_time: ActiveValue::Set(flight.departure_time),
            duration_minutes: ActiveValue::Set(flight.duration_minutes),
            distance_km: ActiveValue::Set(flight.distance_km),
            aircraft_type_id: ActiveValue::Set(flight.aircraft_type_id),
            source_airport_id: ActiveValue::Set(flight.source_airport_id),
            destination_airport_id: ActiveValue::Set(flight.destination_airport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a flight by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The flight
    /// - `Ok(None)`: Flight not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find_by_id(id).one(self.db).await
    }

    /// Gets every flight that has no roster claim, oldest departure first
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Flights still waiting for a roster
    /// - `Err(DbErr)`: Database error
    pub async fn get_without_roster(&self) -> Result<Vec<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find()
            .filter(
                entity::flight::Column::Id.not_in_subquery(
                    Query::select()
                        .column(entity::flight_roster::Column::FlightId)
                        .from(entity::flight_roster::Entity)
                        .to_owned(),
                ),
            )
            .order_by_asc(entity::flight::Column::DepartureTime)
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the flight menu in order
    ///
    /// # Arguments
    /// - `flight_id`: ID of the flight
    ///
    /// # Returns
    /// - `Ok(Vec<String>)`: Dish names, possibly empty
    /// - `Err(DbErr)`: Database error
    pub async fn menu(&self, flight_id: i32) -> Result<Vec<String>, DbErr> {
        let items = entity::prelude::FlightMenuItem::find()
            .filter(entity::flight_menu_item::Column::FlightId.eq(flight_id))
            .order_by_asc(entity::flight_menu_item::Column::Position)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(|item| item.dish).collect())
    }

    /// Appends a dish to the end of the flight menu
    ///
    /// # Arguments
    /// - `flight_id`: ID of the flight
    /// - `dish`: Dish name
    ///
    /// # Returns
    /// - `Ok(Model)`: The created menu item
    /// - `Err(DbErr)`: Database error
    pub async fn append_menu_item(
        &self,
        flight_id: i32,
        dish: String,
    ) -> Result<entity::flight_menu_item::Model, DbErr> {
        let position = entity::prelude::FlightMenuItem::find()
            .filter(entity::flight_menu_item::Column::FlightId.eq(flight_id))
            .count(self.db)
            .await?;

        entity::flight_menu_item::ActiveModel {
            flight_id: ActiveValue::Set(flight_id),
            position: ActiveValue::Set(position as i32),
            dish: ActiveValue::Set(dish),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Flight::find().count(self.db).await
    }
}
