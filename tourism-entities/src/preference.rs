use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Accommodation {
    Hotel      = 1,
    GuestHouse = 2,
}

/// Travel preferences of a single user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub user                : Id,
    pub budget              : f64,
    pub accommodation       : Accommodation,
    pub stars               : u8,
    pub forks               : u8,
    pub departure_date      : Date,
    pub arrival_date        : Date,
    pub departure_city      : Option<Id>,
    pub arrival_city        : Option<Id>,
    pub activity_categories : Vec<String>,
    pub cuisines            : Vec<String>,
}
