mod cabin_crew;
mod flight;
mod passenger;
mod pilot;
mod roster_claim;
mod schedule;
mod seat_assignment;
mod seat_map;
