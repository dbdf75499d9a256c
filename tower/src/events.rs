use std::sync::Arc;

use crate::flight::TowerFlight;

/// Notification emitted when a flight takes off, carrying the flight that
/// departed.
#[derive(Clone)]
pub struct TakeOffEvent {
    pub flight: Arc<dyn TowerFlight>,
}

impl TakeOffEvent {
    pub fn new(flight: Arc<dyn TowerFlight>) -> Self {
        TakeOffEvent { flight }
    }
}

/// Notification emitted when a flight lands, carrying the flight that
/// touched down.
#[derive(Clone)]
pub struct LandedEvent {
    pub flight: Arc<dyn TowerFlight>,
}

impl LandedEvent {
    pub fn new(flight: Arc<dyn TowerFlight>) -> Self {
        LandedEvent { flight }
    }
}

/// Subscriber callback for takeoff notifications. Callbacks are invoked
/// synchronously, in subscription order, on the thread that triggered the
/// transition.
pub type TakeOffListener = Arc<dyn Fn(&TakeOffEvent) + Send + Sync>;

/// Subscriber callback for landing notifications.
pub type LandedListener = Arc<dyn Fn(&LandedEvent) + Send + Sync>;
