use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

/// A point of interest of any kind.
///
/// Only the fields of the corresponding kind are present.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Poi {
    pub id          : i64,
    pub kind        : PoiKind,
    pub name        : String,
    pub description : Option<String>,
    pub latitude    : Option<f64>,
    pub longitude   : Option<f64>,
    pub price       : Option<f64>,
    pub image       : Option<String>,
    pub phone       : Option<String>,
    pub website     : Option<String>,
    pub destination : Option<i64>,
    #[serde(flatten)]
    pub details     : PoiDetails,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at  : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at  : OffsetDateTime,
}

/// Kind-specific fields of a point of interest.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PoiDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    /// `YYYY-MM-DD`, required for festivals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The editable fields of a point of interest. The kind
/// is determined by the collection.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPoi {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(flatten)]
    pub details: PoiDetails,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum PoiKind {
    Hotel,
    Restaurant,
    Museum,
    Activity,
    Festival,
    GuestHouse,
    ArchaeologicalSite,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Destination {
    pub id        : i64,
    pub name      : String,
    pub latitude  : f64,
    pub longitude : f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewDestination {
    pub name      : String,
    pub latitude  : f64,
    pub longitude : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CircuitSchedule {
    pub day: u16,
    pub destination: i64,
    #[serde(default)]
    pub description: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Circuit {
    pub id             : i64,
    pub name           : String,
    pub circuit_code   : String,
    pub departure_city : String,
    pub arrival_city   : String,
    pub price          : f64,
    pub duration       : u16,
    pub description    : Option<String>,
    pub schedules      : Vec<CircuitSchedule>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at     : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at     : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewCircuit {
    pub name: String,
    pub circuit_code: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub price: f64,
    pub duration: u16,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedules: Vec<CircuitSchedule>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CircuitHistory {
    pub id             : i64,
    pub circuit        : i64,
    /// `YYYY-MM-DD`
    pub departure_date : String,
    /// `YYYY-MM-DD`
    pub arrival_date   : String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at     : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at     : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewCircuitHistory {
    pub circuit: i64,
    pub departure_date: String,
    pub arrival_date: String,
}

/// The target of a review, a favorite or a click.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EntityRef {
    pub entity_type: String,
    pub entity_id: i64,
}

/// The resolved target of a review, a favorite or a click.
///
/// Targets that don't exist (anymore) are flagged as
/// `dangling` without a name.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EntityTarget {
    pub entity_type : String,
    pub entity_id   : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name : Option<String>,
    pub dangling    : bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Review {
    pub id         : i64,
    #[serde(flatten)]
    pub target     : EntityTarget,
    pub user       : i64,
    pub rating     : u8,
    pub comment    : Option<String>,
    pub image      : Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewReview {
    #[serde(flatten)]
    pub target: EntityRef,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ReviewUpdate {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Favorite {
    pub id         : i64,
    #[serde(flatten)]
    pub target     : EntityTarget,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at : OffsetDateTime,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Click {
    pub id         : i64,
    #[serde(flatten)]
    pub target     : EntityTarget,
    #[serde(with = "time::serde::rfc3339")]
    pub clicked_at : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    Hotel,
    GuestHouse,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Preference {
    pub budget              : f64,
    pub accommodation       : Accommodation,
    pub stars               : u8,
    pub forks               : u8,
    /// `YYYY-MM-DD`
    pub departure_date      : String,
    /// `YYYY-MM-DD`
    pub arrival_date        : String,
    #[serde(default)]
    pub departure_city      : Option<i64>,
    #[serde(default)]
    pub arrival_city        : Option<i64>,
    #[serde(default)]
    pub activity_categories : Vec<String>,
    #[serde(default)]
    pub cuisines            : Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id             : i64,
    pub email          : String,
    pub role           : UserRole,
    pub username       : Option<String>,
    pub firstname      : String,
    pub lastname       : String,
    pub phonenumber    : Option<String>,
    pub gender         : Option<String>,
    /// `YYYY-MM-DD`
    pub dateofbirth    : Option<String>,
    pub location       : Option<String>,
    pub profilepic     : Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub blockstartdate : Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub blockenddate   : Option<OffsetDateTime>,
    pub is_blocked     : bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at     : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub phonenumber: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dateofbirth: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profilepic: Option<String>,
}

/// Partial update: Missing fields are left untouched.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phonenumber: Option<String>,
    pub gender: Option<String>,
    pub dateofbirth: Option<String>,
    pub location: Option<String>,
    pub profilepic: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Both dates block the user, anything else unblocks.
///
/// Dates are either plain (`YYYY-MM-DD`) or RFC 3339 timestamps.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct BlockPeriod {
    pub blockstartdate: Option<String>,
    pub blockenddate: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// A human-readable message describing the error.
    pub message: String,
}
