use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{circuit::Circuit, destination::Destination, id::Id, poi::*};

/// Everything that could be the target of a review, a favorite
/// or a click.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Hotel              = 1,
    Restaurant         = 2,
    Museum             = 3,
    Activity           = 4,
    Festival           = 5,
    GuestHouse         = 6,
    ArchaeologicalSite = 7,
    Destination        = 8,
    Circuit            = 9,
}

impl EntityKind {
    pub const fn poi_kind(self) -> Option<PoiKind> {
        match self {
            Self::Hotel => Some(PoiKind::Hotel),
            Self::Restaurant => Some(PoiKind::Restaurant),
            Self::Museum => Some(PoiKind::Museum),
            Self::Activity => Some(PoiKind::Activity),
            Self::Festival => Some(PoiKind::Festival),
            Self::GuestHouse => Some(PoiKind::GuestHouse),
            Self::ArchaeologicalSite => Some(PoiKind::ArchaeologicalSite),
            Self::Destination | Self::Circuit => None,
        }
    }
}

impl From<PoiKind> for EntityKind {
    fn from(from: PoiKind) -> Self {
        match from {
            PoiKind::Hotel => Self::Hotel,
            PoiKind::Restaurant => Self::Restaurant,
            PoiKind::Museum => Self::Museum,
            PoiKind::Activity => Self::Activity,
            PoiKind::Festival => Self::Festival,
            PoiKind::GuestHouse => Self::GuestHouse,
            PoiKind::ArchaeologicalSite => Self::ArchaeologicalSite,
        }
    }
}

/// A weak reference to an entity of any kind.
///
/// The referenced entity might not exist (anymore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: Id,
}

impl EntityRef {
    pub const fn new(kind: EntityKind, id: Id) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// A loaded entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Poi(Poi),
    Destination(Destination),
    Circuit(Circuit),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Poi(poi) => poi.kind().into(),
            Self::Destination(_) => EntityKind::Destination,
            Self::Circuit(_) => EntityKind::Circuit,
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Self::Poi(poi) => poi.id,
            Self::Destination(destination) => destination.id,
            Self::Circuit(circuit) => circuit.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Poi(poi) => &poi.props.name,
            Self::Destination(destination) => &destination.name,
            Self::Circuit(circuit) => &circuit.props.name,
        }
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.kind(), self.id())
    }
}

/// The outcome of following an [`EntityRef`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedRef {
    Found(Entity),
    /// The target has been deleted or never existed.
    Dangling(EntityRef),
}

impl ResolvedRef {
    pub fn entity_ref(&self) -> EntityRef {
        match self {
            Self::Found(entity) => entity.entity_ref(),
            Self::Dangling(entity_ref) => *entity_ref,
        }
    }

    pub const fn is_dangling(&self) -> bool {
        matches!(self, Self::Dangling(_))
    }

    pub const fn entity(&self) -> Option<&Entity> {
        match self {
            Self::Found(entity) => Some(entity),
            Self::Dangling(_) => None,
        }
    }
}
