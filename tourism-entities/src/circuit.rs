use crate::{id::Id, time::*};

/// A stop of a circuit on a given day.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitSchedule {
    pub day         : u16,
    pub destination : Id,
    pub description : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitProperties {
    pub name           : String,
    pub circuit_code   : String,
    pub departure_city : String,
    pub arrival_city   : String,
    pub price          : f64,
    /// Number of days
    pub duration       : u16,
    pub description    : Option<String>,
    /// Ordered by day
    pub schedules      : Vec<CircuitSchedule>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    pub id         : Id,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
    pub props      : CircuitProperties,
}

/// A past or planned journey along a circuit.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitHistory {
    pub id             : Id,
    pub circuit        : Id,
    pub departure_date : Date,
    pub arrival_date   : Date,
    pub created_at     : Timestamp,
    pub updated_at     : Timestamp,
}

impl CircuitHistory {
    pub fn days(&self) -> i64 {
        days_between(self.departure_date, self.arrival_date)
    }
}
