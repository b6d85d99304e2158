mod aladhan;
mod geolocate;

pub use aladhan::AladhanClient;
pub use geolocate::IpApiLocator;

use crate::error::AppResult;
use crate::schedule::Schedule;

/// What to ask the timings API for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    /// May be empty; the API then resolves the city on its own
    pub country: String,
    /// Aladhan calculation method id
    pub method: u8,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>, country: impl Into<String>, method: u8) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            method,
        }
    }
}

/// Source of daily prayer timings.
pub trait TimingsProvider: Send + Sync {
    fn fetch(&self, query: &LocationQuery) -> AppResult<Schedule>;
}

/// Source of the user's city when none is configured.
pub trait Geolocator: Send + Sync {
    fn locate(&self) -> AppResult<String>;
}
