use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{email::EmailAddress, geo::MapPoint, id::Id, time::*};

/// The different kinds of points of interest.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PoiKind {
    Hotel              = 1,
    Restaurant         = 2,
    Museum             = 3,
    Activity           = 4,
    Festival           = 5,
    GuestHouse         = 6,
    ArchaeologicalSite = 7,
}

/// Kind-specific properties.
#[derive(Debug, Clone, PartialEq)]
pub enum PoiDetails {
    Hotel {
        stars: Option<u8>,
    },
    Restaurant {
        forks: Option<u8>,
        category: Option<String>,
        cuisine: Option<String>,
    },
    Museum {
        hours: Option<String>,
    },
    Activity {
        category: Option<String>,
    },
    Festival {
        date: Date,
    },
    GuestHouse {
        email: Option<EmailAddress>,
    },
    ArchaeologicalSite {
        period: Option<String>,
        site_type: Option<String>,
        location: Option<String>,
    },
}

impl PoiDetails {
    pub const fn kind(&self) -> PoiKind {
        match self {
            Self::Hotel { .. } => PoiKind::Hotel,
            Self::Restaurant { .. } => PoiKind::Restaurant,
            Self::Museum { .. } => PoiKind::Museum,
            Self::Activity { .. } => PoiKind::Activity,
            Self::Festival { .. } => PoiKind::Festival,
            Self::GuestHouse { .. } => PoiKind::GuestHouse,
            Self::ArchaeologicalSite { .. } => PoiKind::ArchaeologicalSite,
        }
    }
}

/// Everything about a point of interest that is provided by its editors.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PoiProperties {
    pub name        : String,
    pub description : Option<String>,
    pub latitude    : Option<f64>,
    pub longitude   : Option<f64>,
    pub price       : Option<f64>,
    pub image       : Option<String>,
    pub phone       : Option<String>,
    pub website     : Option<String>,
    pub details     : PoiDetails,
}

impl PoiProperties {
    pub const fn kind(&self) -> PoiKind {
        self.details.kind()
    }

    /// The position if both coordinates are present and valid.
    pub fn pos(&self) -> Option<MapPoint> {
        MapPoint::try_from_opt_lat_lng_deg(self.latitude, self.longitude)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id          : Id,
    pub destination : Option<Id>,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
    pub props       : PoiProperties,
}

impl Poi {
    pub const fn kind(&self) -> PoiKind {
        self.props.kind()
    }

    pub fn pos(&self) -> Option<MapPoint> {
        self.props.pos()
    }
}
