use entity::sea_orm_active_enums::AttendantType;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

pub struct CabinCrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CabinCrewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets cabin crew of an attendant type rated for an aircraft type
    ///
    /// # Arguments
    /// - `attendant_type`: Attendant type to match
    /// - `aircraft_type_id`: Aircraft type the crew member must hold a rating for
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)`: IDs of matching crew ordered by ID, each once
    /// - `Err(DbErr)`: Database error
    pub async fn find_candidates(
        &self,
        attendant_type: AttendantType,
        aircraft_type_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CabinCrew::find()
            .select_only()
            .column(entity::cabin_crew::Column::Id)
            .distinct()
            .join(
                JoinType::InnerJoin,
                entity::cabin_crew::Relation::TypeRating.def(),
            )
            .filter(entity::cabin_crew_type_rating::Column::AircraftTypeId.eq(aircraft_type_id))
            .filter(entity::cabin_crew::Column::AttendantType.eq(attendant_type))
            .order_by_asc(entity::cabin_crew::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the dish recipes of a chef
    ///
    /// # Returns
    /// - `Ok(Vec<String>)`: Dish names in insertion order, empty for non-chefs
    /// - `Err(DbErr)`: Database error
    pub async fn dishes(&self, cabin_crew_id: i32) -> Result<Vec<String>, DbErr> {
        let dishes = entity::prelude::ChefDish::find()
            .filter(entity::chef_dish::Column::CabinCrewId.eq(cabin_crew_id))
            .order_by_asc(entity::chef_dish::Column::Id)
            .all(self.db)
            .await?;

        Ok(dishes.into_iter().map(|d| d.dish).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CabinCrew::find().count(self.db).await
    }
}
