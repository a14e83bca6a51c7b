//! Temperature sensor implementations

pub mod ntc10k;

pub use ntc10k::Ntc10kSensor;
