pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use tourism_entities::{
        circuit::*, click::*, destination::*, email::*, entity::*, favorite::*, geo::*, id::*,
        password::*, poi::*, preference::*, review::*, time::*, user::*,
    };
}
