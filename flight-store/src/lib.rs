use std::sync::RwLock;

use flight_data::FlightRecord;

/// In-memory store of flight records. Everything lives in process memory and
/// is gone on exit; there is no durability guarantee.
pub struct FlightRepository {
    flights: RwLock<Vec<FlightRecord>>,
}

impl FlightRepository {
    pub fn new() -> Self {
        FlightRepository {
            flights: RwLock::new(Vec::new()),
        }
    }

    /// Appends a record. Records are kept in the order they arrive.
    pub fn add_flight(&self, flight: FlightRecord) {
        if let Ok(mut flights) = self.flights.write() {
            flights.push(flight);
        } else {
            eprintln!("Failed to lock the flight store for writing. Record dropped.");
        }
    }

    /// A copy of every stored record, in insertion order.
    pub fn get_flights(&self) -> Vec<FlightRecord> {
        match self.flights.read() {
            Ok(flights) => flights.clone(),
            Err(_) => {
                eprintln!("Failed to read the flight store. Returning an empty list.");
                Vec::new()
            }
        }
    }
}

impl Default for FlightRepository {
    fn default() -> Self {
        FlightRepository::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str, airliner: &str) -> FlightRecord {
        FlightRecord::new(
            airliner.to_string(),
            id.to_string(),
            "DestinationA".to_string(),
            3.5,
        )
    }

    #[test]
    fn a_new_repository_is_empty() {
        let repository = FlightRepository::new();
        assert!(repository.get_flights().is_empty());
    }

    #[test]
    fn added_flights_come_back_in_order() {
        let repository = FlightRepository::new();
        repository.add_flight(sample_record("FL001", "AirlinerA"));
        repository.add_flight(sample_record("FL002", "AirlinerB"));

        let flights = repository.get_flights();
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].id, "FL001");
        assert_eq!(flights[1].id, "FL002");
        assert_eq!(flights[0], sample_record("FL001", "AirlinerA"));
    }

    #[test]
    fn duplicate_records_are_kept() {
        let repository = FlightRepository::new();
        repository.add_flight(sample_record("FL001", "AirlinerA"));
        repository.add_flight(sample_record("FL001", "AirlinerA"));

        assert_eq!(repository.get_flights().len(), 2);
    }
}
