use std::fmt;

/// Errors surfaced by control tower operations.
#[derive(Debug)]
pub enum TowerError {
    FlightNotFound(String),  // No tracked flight carries the requested id
    AlreadyAirborne(String), // Takeoff requested for a flight already in the air
    NotAirborne(String),     // Altitude change requested for a grounded flight
    TickerStart(String),     // The tick thread could not be spawned
    Lock(String),            // A shared-state lock could not be taken
}

impl fmt::Display for TowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TowerError::FlightNotFound(ref id) => write!(f, "Flight not found: {}", id),
            TowerError::AlreadyAirborne(ref id) => {
                write!(f, "Flight {} is already in the air", id)
            }
            TowerError::NotAirborne(ref id) => {
                write!(f, "Flight {} is on the ground", id)
            }
            TowerError::TickerStart(msg) => write!(f, "Ticker start error: {}", msg),
            TowerError::Lock(msg) => write!(f, "Lock error: {}", msg),
        }
    }
}

impl std::error::Error for TowerError {}
