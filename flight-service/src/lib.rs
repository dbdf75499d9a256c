use std::sync::Arc;

use flight_data::FlightRecord;
use flight_store::FlightRepository;
use tower::control_tower::ControlTower;
use tower::error::TowerError;
use tower::events::{LandedListener, TakeOffListener};
use tower::flight::{Flight, TowerFlight};

/// External-facing façade over one control tower: translates plain records
/// into flights, forwards the tower operations, and exposes the takeoff and
/// landing subscription points.
pub struct FlightService {
    control_tower: Arc<ControlTower>,
    repository: FlightRepository,
}

impl FlightService {
    pub fn new() -> Self {
        FlightService {
            control_tower: ControlTower::new(),
            repository: FlightRepository::new(),
        }
    }

    /// A service whose tower applies a custom altitude policy.
    pub fn with_control_tower(control_tower: Arc<ControlTower>) -> Self {
        FlightService {
            control_tower,
            repository: FlightRepository::new(),
        }
    }

    /// Builds a flight from the record, registers it with the tower, and
    /// keeps the record in the schedule store.
    pub fn add_flight(&self, record: FlightRecord) -> Result<(), TowerError> {
        let flight = Flight::from_record(&record);
        self.control_tower.add_flight(flight)?;
        self.repository.add_flight(record);
        Ok(())
    }

    /// Clears the record's flight for takeoff.
    pub fn take_off_flight(&self, record: &FlightRecord) -> Result<(), TowerError> {
        let flight = self.find(record)?;
        self.control_tower.take_off_flight(&flight)
    }

    /// Lands the record's flight.
    pub fn land_flight(&self, record: &FlightRecord) -> Result<(), TowerError> {
        let flight = self.find(record)?;
        self.control_tower.land_flight(&flight)
    }

    /// Changes the altitude of the record's flight by the given value.
    pub fn change_flight_height(
        &self,
        record: &FlightRecord,
        change_value: i32,
    ) -> Result<(), TowerError> {
        let flight = self.find(record)?;
        self.control_tower.change_flight_height(&flight, change_value)
    }

    pub fn subscribe_to_take_off(&self, listener: TakeOffListener) {
        self.control_tower.on_take_off(listener);
    }

    pub fn subscribe_to_landing(&self, listener: LandedListener) {
        self.control_tower.on_landed(listener);
    }

    /// Live state of every tracked flight, in the order they were added.
    pub fn flights(&self) -> Vec<FlightRecord> {
        self.control_tower.flights()
    }

    /// The records exactly as they were handed to `add_flight`.
    pub fn scheduled_flights(&self) -> Vec<FlightRecord> {
        self.repository.get_flights()
    }

    fn find(&self, record: &FlightRecord) -> Result<Arc<dyn TowerFlight>, TowerError> {
        self.control_tower
            .find_flight_by_id(&record.id)
            .ok_or_else(|| TowerError::FlightNotFound(record.id.clone()))
    }
}

impl Default for FlightService {
    fn default() -> Self {
        FlightService::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> FlightRecord {
        FlightRecord::new(
            "AirlineA".to_string(),
            id.to_string(),
            "DestinationA".to_string(),
            4.0,
        )
    }

    #[test]
    fn added_flights_show_up_live_and_in_the_schedule() {
        let service = FlightService::new();
        service
            .add_flight(sample_record("FL001"))
            .expect("flight should be added");

        let live = service.flights();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, "FL001");
        assert!(!live[0].in_flight);
        assert_eq!(service.scheduled_flights(), vec![sample_record("FL001")]);
    }

    #[test]
    fn operations_on_unknown_records_are_rejected() {
        let service = FlightService::new();
        let unknown = sample_record("FL404");

        assert!(matches!(
            service.take_off_flight(&unknown),
            Err(TowerError::FlightNotFound(_))
        ));
        assert!(matches!(
            service.land_flight(&unknown),
            Err(TowerError::FlightNotFound(_))
        ));
        assert!(matches!(
            service.change_flight_height(&unknown, 1000),
            Err(TowerError::FlightNotFound(_))
        ));
    }

    #[test]
    fn the_schedule_keeps_the_record_as_submitted() {
        let service = FlightService::new();
        let record = sample_record("FL001");
        service
            .add_flight(record.clone())
            .expect("flight should be added");
        service
            .take_off_flight(&record)
            .expect("takeoff is granted");

        // Live state moved on; the schedule still shows the submission.
        assert!(service.flights()[0].in_flight);
        assert!(!service.scheduled_flights()[0].in_flight);

        service.land_flight(&record).expect("landing always succeeds");
    }
}
