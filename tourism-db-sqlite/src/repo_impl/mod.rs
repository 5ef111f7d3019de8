use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sql_types::BigInt,
};

use tourism_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{util::*, *};

mod circuit;
mod circuit_history;
mod click;
mod destination;
mod favorite;
mod poi;
mod preference;
mod review;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function!(fn last_insert_rowid() -> BigInt);

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only() -> repo::Error {
    repo::Error::Other(anyhow!("Read-only database connection"))
}

fn last_insert_id(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map(Id::new)
        .map_err(from_diesel_err)
}

// Updates and deletes of a single row that did not
// match any row are reported as missing.
fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        _ => {
            debug_assert_eq!(1, count);
            Ok(())
        }
    }
}

fn load_entity_ref(entity_type: i16, entity_id: i64) -> Result<EntityRef> {
    let kind = load_enum::<EntityKind>("entity type", entity_type)?;
    Ok(EntityRef::new(kind, Id::new(entity_id)))
}
