// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait DestinationRepo {
    fn create_destination(&self, destination: &NewDestination) -> Result<Id>;
    fn update_destination(&self, destination: &Destination) -> Result<()>;
    fn delete_destination(&self, id: Id) -> Result<()>;

    fn get_destination(&self, id: Id) -> Result<Destination>;

    // Ordered by id
    fn all_destinations(&self) -> Result<Vec<Destination>>;
}

pub trait PoiRepo {
    fn create_poi(&self, props: &PoiProperties, created_at: Timestamp) -> Result<Id>;

    // Fails with `NotFound` if the stored point of interest has
    // a different kind. The destination is left untouched.
    fn update_poi(&self, id: Id, props: &PoiProperties, updated_at: Timestamp) -> Result<()>;

    fn assign_poi_destination(&self, id: Id, destination: Option<Id>) -> Result<()>;

    // Fails with `NotFound` if the point of interest has a different kind.
    fn get_poi(&self, kind: PoiKind, id: Id) -> Result<Poi>;
    fn delete_poi(&self, kind: PoiKind, id: Id) -> Result<()>;

    // Ordered by id
    fn all_pois_of_kind(&self, kind: PoiKind) -> Result<Vec<Poi>>;

    // All kinds, ordered by id
    fn pois_without_destination(&self) -> Result<Vec<Poi>>;
}

pub trait UserRepo {
    // The id of the given user is ignored
    fn create_user(&self, user: &User) -> Result<Id>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: Id) -> Result<()>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn all_users(&self) -> Result<Vec<User>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub kind: Option<EntityKind>,
    pub id: Option<Id>,
}

pub trait ReviewRepo {
    fn create_review(&self, review: &NewReview, created_at: Timestamp) -> Result<Id>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: Id) -> Result<()>;

    fn get_review(&self, id: Id) -> Result<Review>;

    // Newest first
    fn query_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>>;
}

pub trait FavoriteRepo {
    // Fails with `AlreadyExists` if the user already marked the target.
    fn create_favorite(&self, user: Id, target: EntityRef, created_at: Timestamp) -> Result<Id>;
    fn delete_favorite(&self, user: Id, target: EntityRef) -> Result<()>;

    fn try_get_favorite(&self, user: Id, target: EntityRef) -> Result<Option<Favorite>>;

    // Newest first
    fn favorites_of_user(&self, user: Id) -> Result<Vec<Favorite>>;
}

pub trait ClickHistoryRepo {
    fn record_click(&self, user: Id, target: EntityRef, clicked_at: Timestamp) -> Result<Id>;

    // Newest first
    fn clicks_of_user(&self, user: Id) -> Result<Vec<ClickHistory>>;
}

pub trait CircuitRepo {
    // Fails with `AlreadyExists` if the circuit code is taken.
    fn create_circuit(&self, props: &CircuitProperties, created_at: Timestamp) -> Result<Id>;
    fn update_circuit(&self, id: Id, props: &CircuitProperties, updated_at: Timestamp)
        -> Result<()>;
    fn delete_circuit(&self, id: Id) -> Result<()>;

    fn get_circuit(&self, id: Id) -> Result<Circuit>;

    // Ordered by id
    fn all_circuits(&self) -> Result<Vec<Circuit>>;
}

#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewCircuitHistory {
    pub circuit        : Id,
    pub departure_date : Date,
    pub arrival_date   : Date,
}

pub trait CircuitHistoryRepo {
    fn create_circuit_history(
        &self,
        history: &NewCircuitHistory,
        created_at: Timestamp,
    ) -> Result<Id>;
    fn update_circuit_history(&self, history: &CircuitHistory) -> Result<()>;
    fn delete_circuit_history(&self, id: Id) -> Result<()>;

    fn get_circuit_history(&self, id: Id) -> Result<CircuitHistory>;

    // Ordered by id
    fn all_circuit_histories(&self) -> Result<Vec<CircuitHistory>>;
}

pub trait PreferenceRepo {
    fn try_get_preference(&self, user: Id) -> Result<Option<Preference>>;

    // Creates or replaces the preference of the user.
    fn save_preference(&self, preference: &Preference) -> Result<()>;

    fn delete_preference(&self, user: Id) -> Result<()>;
}
