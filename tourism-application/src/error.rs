use thiserror::Error;
use tourism_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use tourism_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<tourism_entities::password::ParseError> for AppError {
    fn from(err: tourism_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

impl From<tourism_entities::email::EmailAddressParseError> for AppError {
    fn from(err: tourism_entities::email::EmailAddressParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<tourism_entities::password::ParseError> for BError {
    fn from(_: tourism_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<tourism_entities::email::EmailAddressParseError> for BError {
    fn from(_: tourism_entities::email::EmailAddressParseError) -> Self {
        Self::Parameter(ParameterError::Email)
    }
}
