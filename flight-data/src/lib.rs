use chrono::NaiveDateTime;

/// Plain flight attributes as they cross the service boundary.

#[derive(Clone, Debug, PartialEq)]
pub struct FlightRecord {
    pub airliner: String,
    pub id: String,
    pub destination: String,
    pub duration: f64,
    pub in_flight: bool,
    pub departure_time: Option<NaiveDateTime>,
    pub altitude: i32,
}

impl FlightRecord {
    /// A freshly scheduled flight: grounded, altitude zero, not yet departed.
    pub fn new(airliner: String, id: String, destination: String, duration: f64) -> Self {
        FlightRecord {
            airliner,
            id,
            destination,
            duration,
            in_flight: false,
            departure_time: None,
            altitude: 0,
        }
    }
}

impl Default for FlightRecord {
    fn default() -> Self {
        FlightRecord {
            airliner: "Unassigned".to_string(),
            id: String::new(),
            destination: String::new(),
            duration: 1.0,
            in_flight: false,
            departure_time: None,
            altitude: 0,
        }
    }
}
