use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;

use crate::model::passenger::Passenger;

pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the IDs of every passenger
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)`: Passenger IDs in ascending order
    /// - `Err(DbErr)`: Database error
    pub async fn find_candidates(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Passenger::find()
            .select_only()
            .column(entity::passenger::Column::Id)
            .order_by_asc(entity::passenger::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets passengers with their affiliations, in the order of `ids`
    ///
    /// Unknown IDs are skipped.
    ///
    /// # Arguments
    /// - `ids`: Passenger IDs to load
    ///
    /// # Returns
    /// - `Ok(Vec<Passenger>)`: Passengers with affiliated passenger IDs
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Passenger>, DbErr> {
        let mut passengers: HashMap<i32, entity::passenger::Model> =
            entity::prelude::Passenger::find()
                .filter(entity::passenger::Column::Id.is_in(ids.iter().copied()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect();

        let mut affiliations: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in entity::prelude::PassengerAffiliation::find()
            .filter(entity::passenger_affiliation::Column::PassengerId.is_in(ids.iter().copied()))
            .order_by_asc(entity::passenger_affiliation::Column::AffiliatedPassengerId)
            .all(self.db)
            .await?
        {
            affiliations
                .entry(link.passenger_id)
                .or_default()
                .push(link.affiliated_passenger_id);
        }

        Ok(ids
            .iter()
            .filter_map(|id| passengers.remove(id))
            .map(|p| {
                let affiliated = affiliations.remove(&p.id).unwrap_or_default();
                Passenger::from_entity(p, affiliated)
            })
            .collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Passenger::find().count(self.db).await
    }
}
