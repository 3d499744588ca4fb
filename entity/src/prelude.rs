pub use super::aircraft_type::Entity as AircraftType;
pub use super::airport::Entity as Airport;
pub use super::cabin_crew::Entity as CabinCrew;
pub use super::cabin_crew_type_rating::Entity as CabinCrewTypeRating;
pub use super::chef_dish::Entity as ChefDish;
pub use super::flight::Entity as Flight;
pub use super::flight_menu_item::Entity as FlightMenuItem;
pub use super::flight_roster::Entity as FlightRoster;
pub use super::flight_seat_assignment::Entity as FlightSeatAssignment;
pub use super::passenger::Entity as Passenger;
pub use super::passenger_affiliation::Entity as PassengerAffiliation;
pub use super::pilot::Entity as Pilot;
pub use super::scheduled_flight::Entity as ScheduledFlight;
pub use super::seat_map::Entity as SeatMap;
pub use super::standard_menu_item::Entity as StandardMenuItem;
