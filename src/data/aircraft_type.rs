use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AircraftTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets an aircraft type by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The aircraft type
    /// - `Ok(None)`: Aircraft type not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::aircraft_type::Model>, DbErr> {
        entity::prelude::AircraftType::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the standard menu of an aircraft type in menu order
    ///
    /// # Arguments
    /// - `aircraft_type_id`: ID of the aircraft type
    ///
    /// # Returns
    /// - `Ok(Vec<String>)`: Dish names, possibly empty
    /// - `Err(DbErr)`: Database error
    pub async fn standard_menu(&self, aircraft_type_id: i32) -> Result<Vec<String>, DbErr> {
        let items = entity::prelude::StandardMenuItem::find()
            .filter(entity::standard_menu_item::Column::AircraftTypeId.eq(aircraft_type_id))
            .order_by_asc(entity::standard_menu_item::Column::Position)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(|item| item.dish).collect())
    }
}
