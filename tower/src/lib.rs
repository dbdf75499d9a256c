pub mod control_tower;

pub mod error;

pub mod events;

pub mod flight;

pub mod ticker;

pub(crate) const TICK_FREQUENCY_MILLIS: u64 = 1000;
