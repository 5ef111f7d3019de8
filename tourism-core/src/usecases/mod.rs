mod circuit_history;
mod circuits;
mod clicks;
mod create_new_user;
mod destinations;
mod error;
mod favorites;
mod login;
mod manage_users;
mod preferences;
mod profile;
mod query_pois;
mod resolve_destination;
mod resolve_entity_refs;
mod reviews;
mod store_poi;

#[cfg(test)]
pub mod tests;

pub use self::{
    circuit_history::*, circuits::*, clicks::*, create_new_user::*, destinations::*,
    error::Error, favorites::*, login::*, manage_users::*, preferences::*, profile::*,
    query_pois::*, resolve_destination::*, resolve_entity_refs::*, reviews::*, store_poi::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization::policy::{authorize, Action, Ownership, Subject},
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };

    /// The acting user if authenticated.
    pub fn require_user(actor: Option<&User>) -> Result<&User> {
        actor.ok_or(Error::Unauthorized)
    }

    pub fn ownership_of(actor: Option<&User>) -> Ownership {
        actor.map(Ownership::of_user).unwrap_or(Ownership::Unowned)
    }
}
