use std::sync::{
    atomic::{AtomicBool, AtomicI32, Ordering},
    Arc, Mutex, RwLock, Weak,
};

use chrono::{NaiveDateTime, Utc};
use flight_data::FlightRecord;

use crate::events::{LandedEvent, LandedListener, TakeOffEvent, TakeOffListener};
use crate::ticker::FlightTicker;

/// A flight as the tower sees it: attribute access, the takeoff/landing
/// transitions, the altitude setter, and notification registration.
///
/// `ControlTower` speaks only this trait, so alternate implementations can
/// stand in for [`Flight`].
pub trait TowerFlight: Send + Sync {
    fn airliner(&self) -> String;
    fn id(&self) -> String;
    fn destination(&self) -> String;
    fn set_destination(&self, destination: String);
    fn duration(&self) -> f64;
    fn in_flight(&self) -> bool;
    fn altitude(&self) -> i32;
    fn departure_time(&self) -> Option<NaiveDateTime>;

    /// Lifts the flight off: no precondition is checked here, the tower
    /// guards the transition.
    fn take_off(&self);

    /// Overwrites the current altitude. This is an absolute set; delta
    /// arithmetic lives in the tower.
    fn change_altitude(&self, new_altitude: i32);

    /// Grounds the flight. Unguarded: landing an already-grounded flight
    /// re-emits the landing notification.
    fn land(&self);

    fn on_take_off(&self, listener: TakeOffListener);
    fn on_landed(&self, listener: LandedListener);

    /// The flight's attributes as a plain record.
    fn snapshot(&self) -> FlightRecord {
        FlightRecord {
            airliner: self.airliner(),
            id: self.id(),
            destination: self.destination(),
            duration: self.duration(),
            in_flight: self.in_flight(),
            departure_time: self.departure_time(),
            altitude: self.altitude(),
        }
    }
}

/// A tracked flight. Created grounded at altitude zero; takeoff records the
/// departure time and starts a one-second ticker that advances the flight by
/// one simulated hour per tick. Once the elapsed ticks reach the scheduled
/// duration the flight lands on its own.
pub struct Flight {
    airliner: String,
    id: String,
    destination: RwLock<String>,
    duration: f64,
    in_flight: AtomicBool,
    altitude: AtomicI32,
    departure_time: Mutex<Option<NaiveDateTime>>,
    ticker: Mutex<Option<Arc<FlightTicker>>>,
    take_off_listeners: Mutex<Vec<TakeOffListener>>,
    landed_listeners: Mutex<Vec<LandedListener>>,
    self_ref: Weak<Flight>,
}

impl Flight {
    /// Creates a new grounded flight. The core assumes well-typed arguments;
    /// input validation happens at the boundary before values reach here.
    pub fn new(airliner: String, id: String, destination: String, duration: f64) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Flight {
            airliner,
            id,
            destination: RwLock::new(destination),
            duration,
            in_flight: AtomicBool::new(false),
            altitude: AtomicI32::new(0),
            departure_time: Mutex::new(None),
            ticker: Mutex::new(None),
            take_off_listeners: Mutex::new(Vec::new()),
            landed_listeners: Mutex::new(Vec::new()),
            self_ref: self_ref.clone(),
        })
    }

    /// Builds a flight from the attributes of a plain record. Live state
    /// (in-flight flag, altitude, departure time) starts fresh.
    pub fn from_record(record: &FlightRecord) -> Arc<Self> {
        Flight::new(
            record.airliner.clone(),
            record.id.clone(),
            record.destination.clone(),
            record.duration,
        )
    }

    fn as_dyn(&self) -> Option<Arc<dyn TowerFlight>> {
        match self.self_ref.upgrade() {
            Some(flight) => Some(flight),
            None => None,
        }
    }

    fn emit_take_off(&self) {
        let flight = match self.as_dyn() {
            Some(flight) => flight,
            None => return,
        };
        let listeners = match self.take_off_listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => {
                eprintln!("Failed to lock takeoff listeners. Notification skipped.");
                return;
            }
        };

        let event = TakeOffEvent::new(flight);
        for listener in listeners {
            listener(&event);
        }
    }

    fn emit_landed(&self) {
        let flight = match self.as_dyn() {
            Some(flight) => flight,
            None => return,
        };
        let listeners = match self.landed_listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => {
                eprintln!("Failed to lock landing listeners. Notification skipped.");
                return;
            }
        };

        let event = LandedEvent::new(flight);
        for listener in listeners {
            listener(&event);
        }
    }

    fn stop_ticker(&self) {
        if let Ok(slot) = self.ticker.lock() {
            if let Some(ticker) = slot.as_ref() {
                ticker.stop();
            }
        } else {
            eprintln!("Failed to lock the ticker slot. Tick thread left running.");
        }
    }
}

impl TowerFlight for Flight {
    fn airliner(&self) -> String {
        self.airliner.clone()
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn destination(&self) -> String {
        self.destination
            .read()
            .map(|destination| destination.clone())
            .unwrap_or_default()
    }

    fn set_destination(&self, destination: String) {
        if let Ok(mut current) = self.destination.write() {
            *current = destination;
        } else {
            eprintln!("Failed to lock the destination for writing. Change dropped.");
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn altitude(&self) -> i32 {
        self.altitude.load(Ordering::SeqCst)
    }

    fn departure_time(&self) -> Option<NaiveDateTime> {
        self.departure_time.lock().ok().and_then(|departure| *departure)
    }

    fn take_off(&self) {
        self.in_flight.store(true, Ordering::SeqCst);
        if let Ok(mut departure) = self.departure_time.lock() {
            *departure = Some(Utc::now().naive_utc());
        } else {
            eprintln!("Failed to lock the departure time. Timestamp not recorded.");
        }

        // Each takeoff gets a fresh ticker; one left over from an earlier
        // cycle is stopped before it is replaced.
        let ticker = FlightTicker::new();
        if let Ok(mut slot) = self.ticker.lock() {
            if let Some(previous) = slot.replace(Arc::clone(&ticker)) {
                previous.stop();
            }
        } else {
            eprintln!("Failed to lock the ticker slot. Takeoff continues without it.");
        }

        let duration = self.duration;
        let flight = self.self_ref.clone();
        let started = Arc::clone(&ticker).start(&self.id, move |elapsed_ticks| {
            if elapsed_ticks as f64 >= duration {
                if let Some(flight) = flight.upgrade() {
                    flight.land();
                }
            }
        });
        if let Err(e) = started {
            eprintln!("Failed to start the ticker for flight {}: {}", self.id, e);
        }

        self.emit_take_off();
    }

    fn change_altitude(&self, new_altitude: i32) {
        self.altitude.store(new_altitude, Ordering::SeqCst);
    }

    fn land(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
        self.stop_ticker();
        self.emit_landed();
    }

    fn on_take_off(&self, listener: TakeOffListener) {
        if let Ok(mut listeners) = self.take_off_listeners.lock() {
            listeners.push(listener);
        } else {
            eprintln!("Failed to lock takeoff listeners. Subscription dropped.");
        }
    }

    fn on_landed(&self, listener: LandedListener) {
        if let Ok(mut listeners) = self.landed_listeners.lock() {
            listeners.push(listener);
        } else {
            eprintln!("Failed to lock landing listeners. Subscription dropped.");
        }
    }
}

impl Drop for Flight {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
