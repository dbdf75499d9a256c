use std::sync::{Arc, Mutex, RwLock, Weak};

use flight_data::FlightRecord;

use crate::error::TowerError;
use crate::events::{LandedEvent, LandedListener, TakeOffEvent, TakeOffListener};
use crate::flight::TowerFlight;

/// Combines a flight's current altitude with a requested change into the new
/// absolute altitude.
pub type AltitudeCombiner = Arc<dyn Fn(i32, i32) -> i32 + Send + Sync>;

/// The aggregate managing every tracked flight.
///
/// Flights are kept in insertion order and lookups return the first match;
/// duplicate ids are stored as-is. The tower subscribes itself to each added
/// flight for the collection's lifetime and relays takeoff and landing
/// notifications to its own subscribers, passing through the original flight
/// reference. There is no removal path.
pub struct ControlTower {
    flights: RwLock<Vec<Arc<dyn TowerFlight>>>,
    altitude_combiner: AltitudeCombiner,
    take_off_listeners: Mutex<Vec<TakeOffListener>>,
    landed_listeners: Mutex<Vec<LandedListener>>,
}

impl ControlTower {
    /// A tower with the default altitude policy: current altitude plus the
    /// requested change.
    pub fn new() -> Arc<Self> {
        ControlTower::with_altitude_combiner(Arc::new(|current_altitude, change_value| {
            current_altitude + change_value
        }))
    }

    /// A tower with a custom altitude-combination policy.
    pub fn with_altitude_combiner(altitude_combiner: AltitudeCombiner) -> Arc<Self> {
        Arc::new(ControlTower {
            flights: RwLock::new(Vec::new()),
            altitude_combiner,
            take_off_listeners: Mutex::new(Vec::new()),
            landed_listeners: Mutex::new(Vec::new()),
        })
    }

    /// Subscribes the tower to the flight's notifications, then appends the
    /// flight to the collection. No duplicate-id check is made.
    pub fn add_flight(self: &Arc<Self>, flight: Arc<dyn TowerFlight>) -> Result<(), TowerError> {
        // The relays hold a weak reference: flights must not keep the tower
        // alive through their subscription lists.
        let tower = Arc::downgrade(self);
        flight.on_take_off(Arc::new({
            let tower = Weak::clone(&tower);
            move |event: &TakeOffEvent| {
                if let Some(tower) = tower.upgrade() {
                    tower.relay_take_off(event);
                }
            }
        }));
        flight.on_landed(Arc::new(move |event: &LandedEvent| {
            if let Some(tower) = tower.upgrade() {
                tower.relay_landed(event);
            }
        }));

        let mut flights = self
            .flights
            .write()
            .map_err(|_| TowerError::Lock("Failed to lock flights for adding.".to_string()))?;
        flights.push(flight);
        Ok(())
    }

    /// The first flight whose id matches, in insertion order. A blank id
    /// never matches.
    pub fn find_flight_by_id(&self, flight_id: &str) -> Option<Arc<dyn TowerFlight>> {
        if flight_id.trim().is_empty() {
            return None;
        }
        match self.flights.read() {
            Ok(flights) => flights.iter().find(|flight| flight.id() == flight_id).cloned(),
            Err(_) => {
                eprintln!("Failed to read flights. Lookup skipped.");
                None
            }
        }
    }

    /// Clears the flight for takeoff. A flight already in the air is
    /// rejected: no state changes and no notification goes out.
    pub fn take_off_flight(&self, flight: &Arc<dyn TowerFlight>) -> Result<(), TowerError> {
        if flight.in_flight() {
            return Err(TowerError::AlreadyAirborne(flight.id()));
        }
        flight.take_off();
        Ok(())
    }

    /// Applies an altitude change to an airborne flight. The combiner turns
    /// the current altitude and the requested change into the new absolute
    /// value; the default policy adds them. A grounded flight is rejected
    /// and keeps its altitude.
    pub fn change_flight_height(
        &self,
        flight: &Arc<dyn TowerFlight>,
        change_value: i32,
    ) -> Result<(), TowerError> {
        if !flight.in_flight() {
            return Err(TowerError::NotAirborne(flight.id()));
        }
        let new_altitude = (self.altitude_combiner)(flight.altitude(), change_value);
        flight.change_altitude(new_altitude);
        Ok(())
    }

    /// Lands the flight unconditionally. Exactly one landing notification
    /// reaches tower subscribers per landing, relayed from the flight's own
    /// emission; landing a grounded flight re-emits it.
    pub fn land_flight(&self, flight: &Arc<dyn TowerFlight>) -> Result<(), TowerError> {
        flight.land();
        Ok(())
    }

    /// Registers a tower-level takeoff subscriber.
    pub fn on_take_off(&self, listener: TakeOffListener) {
        if let Ok(mut listeners) = self.take_off_listeners.lock() {
            listeners.push(listener);
        } else {
            eprintln!("Failed to lock takeoff listeners. Subscription dropped.");
        }
    }

    /// Registers a tower-level landing subscriber.
    pub fn on_landed(&self, listener: LandedListener) {
        if let Ok(mut listeners) = self.landed_listeners.lock() {
            listeners.push(listener);
        } else {
            eprintln!("Failed to lock landing listeners. Subscription dropped.");
        }
    }

    /// Snapshot of every tracked flight, in insertion order.
    pub fn flights(&self) -> Vec<FlightRecord> {
        match self.flights.read() {
            Ok(flights) => flights.iter().map(|flight| flight.snapshot()).collect(),
            Err(_) => {
                eprintln!("Failed to read flights. Returning an empty list.");
                Vec::new()
            }
        }
    }

    fn relay_take_off(&self, event: &TakeOffEvent) {
        // The listener list is cloned out of the lock so subscribers run
        // without holding it; a subscriber may re-enter the tower.
        let listeners = match self.take_off_listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => {
                eprintln!("Failed to lock takeoff listeners. Relay skipped.");
                return;
            }
        };
        for listener in listeners {
            listener(event);
        }
    }

    fn relay_landed(&self, event: &LandedEvent) {
        let listeners = match self.landed_listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => {
                eprintln!("Failed to lock landing listeners. Relay skipped.");
                return;
            }
        };
        for listener in listeners {
            listener(event);
        }
    }
}
