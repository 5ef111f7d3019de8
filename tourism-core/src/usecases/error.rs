use crate::{
    authorization::policy,
    repositories,
    util::validate::{CircuitInvalidation, PoiInvalidation, PreferenceInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Poi(#[from] PoiInvalidation),
    #[error(transparent)]
    Circuit(#[from] CircuitInvalidation),
    #[error(transparent)]
    Preference(#[from] PreferenceInvalidation),
    #[error("The name must not be empty")]
    Name,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid email address")]
    Email,
    #[error("The password must have at least 6 characters")]
    Password,
    #[error("A user with this email address already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("You are blocked from posting reviews.")]
    Blocked,
    #[error("The rating must be between 1 and 5")]
    RatingValue,
    #[error("This item is already in your favorites.")]
    AlreadyFavorite,
    #[error("This item is not in your favorites.")]
    NotFavorite,
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDate,
    #[error("Circuit not found.")]
    CircuitNotFound,
    #[error("The duration of the circuit must be {0} days.")]
    CircuitDuration(u16),
    #[error("A circuit with this code already exists")]
    CircuitCodeExists,
    #[error("Unknown destination")]
    UnknownDestination,
    #[error("The end of the block period is before its start")]
    EndDateBeforeStart,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<policy::Error> for Error {
    fn from(err: policy::Error) -> Self {
        match err {
            policy::Error::Unauthorized => Self::Unauthorized,
            policy::Error::Forbidden => Self::Forbidden,
        }
    }
}

impl From<tourism_entities::password::ParseError> for Error {
    fn from(_: tourism_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<tourism_entities::email::EmailAddressParseError> for Error {
    fn from(_: tourism_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}
