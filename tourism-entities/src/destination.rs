use crate::{geo::MapPoint, id::Id};

/// Canonical administrative region, e.g. a Tunisian governorate.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id        : Id,
    pub name      : String,
    pub latitude  : f64,
    pub longitude : f64,
}

impl Destination {
    pub fn pos(&self) -> Option<MapPoint> {
        MapPoint::try_from_lat_lng_deg(self.latitude, self.longitude)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewDestination {
    pub name      : String,
    pub latitude  : f64,
    pub longitude : f64,
}
