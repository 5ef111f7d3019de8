#[macro_use]
extern crate log;

mod create_user;
mod resolve_destinations;
mod store_poi;

pub mod prelude {
    pub use super::{create_user::*, resolve_destinations::*, store_poi::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tourism_core::{entities::*, gateways::geocode::ReverseGeoCodingGateway, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use tourism_db_sqlite::Connections;
}
