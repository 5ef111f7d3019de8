use crate::repositories::*;

/// All repositories of a single storage backend.
pub trait Db:
    DestinationRepo
    + PoiRepo
    + UserRepo
    + ReviewRepo
    + FavoriteRepo
    + ClickHistoryRepo
    + CircuitRepo
    + CircuitHistoryRepo
    + PreferenceRepo
{
}

impl<T> Db for T where
    T: DestinationRepo
        + PoiRepo
        + UserRepo
        + ReviewRepo
        + FavoriteRepo
        + ClickHistoryRepo
        + CircuitRepo
        + CircuitHistoryRepo
        + PreferenceRepo
{
}
