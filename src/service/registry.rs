use sea_orm::DatabaseConnection;

use crate::{
    data::{
        cabin_crew::CabinCrewRepository, flight::FlightRepository,
        passenger::PassengerRepository, pilot::PilotRepository,
    },
    error::AppError,
    model::registry::RegistryCounts,
};

pub struct RegistryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts flights, passengers, pilots and cabin crew
    ///
    /// # Returns
    /// - `Ok(RegistryCounts)`: Record totals
    /// - `Err(AppError)`: Database error
    pub async fn counts(&self) -> Result<RegistryCounts, AppError> {
        Ok(RegistryCounts {
            flights: FlightRepository::new(self.db).count().await?,
            passengers: PassengerRepository::new(self.db).count().await?,
            pilots: PilotRepository::new(self.db).count().await?,
            cabin_crew: CabinCrewRepository::new(self.db).count().await?,
        })
    }
}
