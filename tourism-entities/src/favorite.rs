use crate::{entity::EntityRef, id::Id, time::*};

/// Unique per user and target.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id         : Id,
    pub user       : Id,
    pub target     : EntityRef,
    pub created_at : Timestamp,
}
