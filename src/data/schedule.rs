use entity::sea_orm_active_enums::PersonKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Repository for the flights each person is committed to.
pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a flight to a person's schedule
    ///
    /// # Arguments
    /// - `person_kind`: Table the person ID refers to
    /// - `person_id`: ID of the pilot, cabin crew member or passenger
    /// - `flight_id`: ID of the flight
    ///
    /// # Returns
    /// - `Ok(Model)`: The created schedule entry
    /// - `Err(DbErr)`: Database error
    pub async fn append(
        &self,
        person_kind: PersonKind,
        person_id: i32,
        flight_id: i32,
    ) -> Result<entity::scheduled_flight::Model, DbErr> {
        entity::scheduled_flight::ActiveModel {
            person_kind: ActiveValue::Set(person_kind),
            person_id: ActiveValue::Set(person_id),
            flight_id: ActiveValue::Set(flight_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the flights a person is scheduled on
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Scheduled flights ordered by departure
    /// - `Err(DbErr)`: Database error
    pub async fn flights_for(
        &self,
        person_kind: PersonKind,
        person_id: i32,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find()
            .join(
                JoinType::InnerJoin,
                entity::scheduled_flight::Relation::Flight.def().rev(),
            )
            .filter(entity::scheduled_flight::Column::PersonKind.eq(person_kind))
            .filter(entity::scheduled_flight::Column::PersonId.eq(person_id))
            .order_by_asc(entity::flight::Column::DepartureTime)
            .all(self.db)
            .await
    }
}
