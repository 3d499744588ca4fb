//! Cabin crew factory for creating test cabin crew members.
//!
//! Type ratings and chef dish recipes live in their own tables; the factory
//! writes them after inserting the crew member.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::AttendantType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cabin crew with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::cabin_crew::CabinCrewFactory;
///
/// let chef = CabinCrewFactory::new(&db, AttendantType::Chef)
///     .type_rating(1)
///     .dish("A")
///     .dish("B")
///     .build()
///     .await?;
/// ```
pub struct CabinCrewFactory<'a> {
    db: &'a DatabaseConnection,
    attendant_type: AttendantType,
    name: String,
    age: i32,
    nationality: String,
    type_ratings: Vec<i32>,
    dishes: Vec<String>,
}

impl<'a> CabinCrewFactory<'a> {
    /// Creates a new CabinCrewFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Crew {id}"` where id is auto-incremented
    /// - type_ratings: none
    /// - dishes: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `attendant_type` - Chief, regular or chef
    ///
    /// # Returns
    /// - `CabinCrewFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, attendant_type: AttendantType) -> Self {
        let id = next_id();
        Self {
            db,
            attendant_type,
            name: format!("Crew {}", id),
            age: 30,
            nationality: "Turkey".to_string(),
            type_ratings: Vec::new(),
            dishes: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an aircraft type the crew member may serve on.
    ///
    /// # Arguments
    /// - `aircraft_type_id` - Aircraft type id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn type_rating(mut self, aircraft_type_id: i32) -> Self {
        self.type_ratings.push(aircraft_type_id);
        self
    }

    /// Adds a dish recipe; only meaningful for chefs.
    pub fn dish(mut self, dish: impl Into<String>) -> Self {
        self.dishes.push(dish.into());
        self
    }

    /// Builds and inserts the crew member, their type ratings and dishes.
    ///
    /// # Returns
    /// - `Ok(entity::cabin_crew::Model)` - Created cabin crew entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cabin_crew::Model, DbErr> {
        let crew = entity::cabin_crew::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            nationality: ActiveValue::Set(self.nationality),
            attendant_type: ActiveValue::Set(self.attendant_type),
        }
        .insert(self.db)
        .await?;

        for aircraft_type_id in self.type_ratings {
            entity::cabin_crew_type_rating::ActiveModel {
                cabin_crew_id: ActiveValue::Set(crew.id),
                aircraft_type_id: ActiveValue::Set(aircraft_type_id),
            }
            .insert(self.db)
            .await?;
        }

        for dish in self.dishes {
            entity::chef_dish::ActiveModel {
                id: ActiveValue::NotSet,
                cabin_crew_id: ActiveValue::Set(crew.id),
                dish: ActiveValue::Set(dish),
            }
            .insert(self.db)
            .await?;
        }

        Ok(crew)
    }
}

/// Creates a cabin crew member rated for one aircraft type.
///
/// # Arguments
/// - `db` - Database connection
/// - `attendant_type` - Chief, regular or chef
/// - `aircraft_type_id` - Aircraft type the crew member is rated for
///
/// # Returns
/// - `Ok(entity::cabin_crew::Model)` - Created cabin crew entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cabin_crew(
    db: &DatabaseConnection,
    attendant_type: AttendantType,
    aircraft_type_id: i32,
) -> Result<entity::cabin_crew::Model, DbErr> {
    CabinCrewFactory::new(db, attendant_type)
        .type_rating(aircraft_type_id)
        .build()
        .await
}
