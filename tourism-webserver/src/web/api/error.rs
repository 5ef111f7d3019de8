use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;
use tourism_application::error::{AppError, BError};
pub use tourism_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Malformed bodies and values out of range (e.g. a rating of 300
// for an `u8`) are rejected like any other invalid parameter.
impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

impl From<rocket::tokio::task::JoinError> for Error {
    fn from(err: rocket::tokio::task::JoinError) -> Self {
        Self::Other(anyhow!(err))
    }
}

fn parameter_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden | ParameterError::Blocked => Status::Forbidden,
        ParameterError::CircuitNotFound
        | ParameterError::NotFavorite
        | ParameterError::UserDoesNotExist
        | ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
        ParameterError::Repo(RepoError::AlreadyExists) => Status::BadRequest,
        ParameterError::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            let status = parameter_status(err);
                            if status != Status::InternalServerError {
                                return json_error_response(req, err, status);
                            }
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        BError::Repo(RepoError::AlreadyExists) => {
                            return json_error_response(req, err, Status::BadRequest);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<tourism_entities::email::EmailAddressParseError> for Error {
    fn from(err: tourism_entities::email::EmailAddressParseError) -> Self {
        AppError::from(err).into()
    }
}
