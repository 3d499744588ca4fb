//! Aircraft type factory for creating test aircraft types.
//!
//! Aircraft types are created with a full seat map from the seeded layouts in
//! `fixture::seat_map` and a standard menu, so a flight on the type can be
//! rostered without further setup.

use crate::fixture::seat_map;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Seat layout written alongside the aircraft type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    NarrowBody,
    WideBody,
    /// No seats; used to exercise seat map validation.
    Empty,
}

/// Factory for creating test aircraft types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::aircraft_type::{AircraftTypeFactory, Layout};
///
/// let aircraft = AircraftTypeFactory::new(&db, 3)
///     .name("Boeing 777")
///     .layout(Layout::WideBody)
///     .build()
///     .await?;
/// ```
pub struct AircraftTypeFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    layout: Layout,
    standard_menu: Vec<String>,
}

impl<'a> AircraftTypeFactory<'a> {
    /// Creates a new AircraftTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Aircraft {id}"`
    /// - layout: wide-body for id 3, narrow-body otherwise
    /// - standard_menu: `["Chicken", "Pasta", "Salad"]`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `id` - Explicit aircraft type id; roster quotas are keyed on it
    ///
    /// # Returns
    /// - `AircraftTypeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, id: i32) -> Self {
        Self {
            db,
            id,
            name: format!("Aircraft {}", id),
            layout: if id == 3 {
                Layout::WideBody
            } else {
                Layout::NarrowBody
            },
            standard_menu: vec!["Chicken".into(), "Pasta".into(), "Salad".into()],
        }
    }

    /// Sets the aircraft type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat layout written for the type.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the standard menu copied onto new flights of this type.
    ///
    /// # Arguments
    /// - `dishes` - Dishes in menu order
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn standard_menu(mut self, dishes: Vec<String>) -> Self {
        self.standard_menu = dishes;
        self
    }

    /// Builds and inserts the aircraft type, its seat map and its standard menu.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft_type::Model)` - Created aircraft type
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::aircraft_type::Model, DbErr> {
        let seats = match self.layout {
            Layout::NarrowBody => seat_map::narrow_body(self.id),
            Layout::WideBody => seat_map::wide_body(self.id),
            Layout::Empty => Vec::new(),
        };
        let (crew_limit, passenger_limit) = match self.layout {
            Layout::NarrowBody => (
                seat_map::NARROW_BODY_PILOT_SEATS + seat_map::NARROW_BODY_CREW_SEATS,
                seat_map::NARROW_BODY_PASSENGER_SEATS,
            ),
            Layout::WideBody => (
                seat_map::WIDE_BODY_PILOT_SEATS + seat_map::WIDE_BODY_CREW_SEATS,
                seat_map::WIDE_BODY_PASSENGER_SEATS,
            ),
            Layout::Empty => (0, 0),
        };

        let aircraft = entity::aircraft_type::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            seat_count: ActiveValue::Set(seats.len() as i32),
            crew_limit: ActiveValue::Set(crew_limit as i32),
            passenger_limit: ActiveValue::Set(passenger_limit as i32),
        }
        .insert(self.db)
        .await?;

        if !seats.is_empty() {
            entity::prelude::SeatMap::insert_many(seats)
                .exec(self.db)
                .await?;
        }

        for (position, dish) in self.standard_menu.into_iter().enumerate() {
            entity::standard_menu_item::ActiveModel {
                id: ActiveValue::NotSet,
                aircraft_type_id: ActiveValue::Set(aircraft.id),
                position: ActiveValue::Set(position as i32),
                dish: ActiveValue::Set(dish),
            }
            .insert(self.db)
            .await?;
        }

        Ok(aircraft)
    }
}

/// Creates a Boeing 737 (type 1) with the narrow-body layout.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::aircraft_type::Model)` - Created aircraft type
/// - `Err(DbErr)` - Database error during insert
pub async fn create_narrow_body(
    db: &DatabaseConnection,
) -> Result<entity::aircraft_type::Model, DbErr> {
    AircraftTypeFactory::new(db, 1)
        .name("Boeing 737")
        .build()
        .await
}

/// Creates a Boeing 777 (type 3) with the wide-body layout.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::aircraft_type::Model)` - Created aircraft type
/// - `Err(DbErr)` - Database error during insert
pub async fn create_wide_body(
    db: &DatabaseConnection,
) -> Result<entity::aircraft_type::Model, DbErr> {
    AircraftTypeFactory::new(db, 3)
        .name("Boeing 777")
        .build()
        .await
}
