use crate::{entity::EntityRef, id::Id, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickHistory {
    pub id         : Id,
    pub user       : Id,
    pub target     : EntityRef,
    pub clicked_at : Timestamp,
}
