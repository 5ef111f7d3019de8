use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tourism_entities::{circuit::*, poi::*, preference::*};

use super::text::eq_ignore_case;

pub use fast_chemail::is_valid_email;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()./-]{4,24}$").unwrap();
    static ref CIRCUIT_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,31}$").unwrap();
}

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone.trim())
}

pub fn is_valid_circuit_code(code: &str) -> bool {
    CIRCUIT_CODE_REGEX.is_match(code)
}

fn is_valid_level(level: u8) -> bool {
    (1..=5).contains(&level)
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoiInvalidation {
    #[error("The name must not be empty")]
    Name,
    #[error("The price must not be negative")]
    Price,
    #[error("Invalid number of stars")]
    Stars,
    #[error("Invalid number of forks")]
    Forks,
    #[error("Invalid phone number")]
    Phone,
    #[error("Invalid email address")]
    Email,
}

impl Validate for PoiProperties {
    type Error = PoiInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.price.is_some_and(|p| !is_valid_price(p)) {
            return Err(Self::Error::Price);
        }
        if self.phone.as_deref().is_some_and(|p| !is_valid_phone(p)) {
            return Err(Self::Error::Phone);
        }
        match &self.details {
            PoiDetails::Hotel { stars } => {
                if stars.is_some_and(|s| !is_valid_level(s)) {
                    return Err(Self::Error::Stars);
                }
            }
            PoiDetails::Restaurant { forks, .. } => {
                if forks.is_some_and(|f| !is_valid_level(f)) {
                    return Err(Self::Error::Forks);
                }
            }
            PoiDetails::GuestHouse { email } => {
                // NOTE:
                // The address has already been parsed but
                // might still be invalid for delivery.
                if email.as_ref().is_some_and(|e| !is_valid_email(e.as_str())) {
                    return Err(Self::Error::Email);
                }
            }
            PoiDetails::Museum { .. }
            | PoiDetails::Activity { .. }
            | PoiDetails::Festival { .. }
            | PoiDetails::ArchaeologicalSite { .. } => {}
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitInvalidation {
    #[error("The name must not be empty")]
    Name,
    #[error("Invalid circuit code")]
    Code,
    #[error("The departure and arrival city must be different")]
    SameCities,
    #[error("The price must not be negative")]
    Price,
    #[error("The duration must be at least one day")]
    Duration,
    #[error("Schedule day {0} is outside of the circuit")]
    ScheduleDay(u16),
}

impl Validate for CircuitProperties {
    type Error = CircuitInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_circuit_code(&self.circuit_code) {
            return Err(Self::Error::Code);
        }
        if eq_ignore_case(self.departure_city.trim(), self.arrival_city.trim()) {
            return Err(Self::Error::SameCities);
        }
        if !is_valid_price(self.price) {
            return Err(Self::Error::Price);
        }
        if self.duration < 1 {
            return Err(Self::Error::Duration);
        }
        if let Some(s) = self
            .schedules
            .iter()
            .find(|s| s.day < 1 || s.day > self.duration)
        {
            return Err(Self::Error::ScheduleDay(s.day));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceInvalidation {
    #[error("The budget must not be negative")]
    Budget,
    #[error("Invalid number of stars")]
    Stars,
    #[error("Invalid number of forks")]
    Forks,
    #[error("The arrival date must not be before the departure date")]
    DateRange,
}

impl Validate for Preference {
    type Error = PreferenceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_price(self.budget) {
            return Err(Self::Error::Budget);
        }
        if !is_valid_level(self.stars) {
            return Err(Self::Error::Stars);
        }
        if !is_valid_level(self.forks) {
            return Err(Self::Error::Forks);
        }
        if self.arrival_date < self.departure_date {
            return Err(Self::Error::DateRange);
        }
        Ok(())
    }
}
