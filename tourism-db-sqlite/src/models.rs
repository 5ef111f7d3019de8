#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = destination)]
pub struct NewDestination<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Queryable)]
pub struct DestinationEntity {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The kind, the creation time and the destination
/// of a point of interest are never changed by an update.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = poi, treat_none_as_null = true)]
pub struct PoiChangeset<'a> {
    pub updated_at: i64,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
    pub image: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
    pub stars: Option<i16>,
    pub forks: Option<i16>,
    pub cuisine: Option<&'a str>,
    pub category: Option<&'a str>,
    pub hours: Option<&'a str>,
    pub festival_date: Option<String>,
    pub email: Option<&'a str>,
    pub period: Option<&'a str>,
    pub site_type: Option<&'a str>,
    pub location: Option<&'a str>,
}

#[derive(Queryable)]
pub struct PoiEntity {
    pub id: i64,
    pub kind: i16,
    pub created_at: i64,
    pub updated_at: i64,
    pub destination_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub stars: Option<i16>,
    pub forks: Option<i16>,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub hours: Option<String>,
    pub festival_date: Option<String>,
    pub email: Option<String>,
    pub period: Option<String>,
    pub site_type: Option<String>,
    pub location: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: i16,
    pub username: Option<&'a str>,
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub phonenumber: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub dateofbirth: Option<String>,
    pub location: Option<&'a str>,
    pub profilepic: Option<&'a str>,
    pub block_start: Option<i64>,
    pub block_end: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub username: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: Option<String>,
    pub gender: Option<String>,
    pub dateofbirth: Option<String>,
    pub location: Option<String>,
    pub profilepic: Option<String>,
    pub block_start: Option<i64>,
    pub block_end: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = review)]
pub struct NewReview<'a> {
    pub entity_type: i16,
    pub entity_id: i64,
    pub user_id: i64,
    pub rating: i16,
    pub comment: Option<&'a str>,
    pub image: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = review, treat_none_as_null = true)]
pub struct ReviewChangeset<'a> {
    pub rating: i16,
    pub comment: Option<&'a str>,
    pub image: Option<&'a str>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: i64,
    pub entity_type: i16,
    pub entity_id: i64,
    pub user_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = favorite)]
pub struct NewFavorite {
    pub user_id: i64,
    pub entity_type: i16,
    pub entity_id: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct FavoriteEntity {
    pub id: i64,
    pub user_id: i64,
    pub entity_type: i16,
    pub entity_id: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = click_history)]
pub struct NewClick {
    pub user_id: i64,
    pub entity_type: i16,
    pub entity_id: i64,
    pub clicked_at: i64,
}

#[derive(Queryable)]
pub struct ClickEntity {
    pub id: i64,
    pub user_id: i64,
    pub entity_type: i16,
    pub entity_id: i64,
    pub clicked_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = circuit, treat_none_as_null = true)]
pub struct CircuitChangeset<'a> {
    pub updated_at: i64,
    pub name: &'a str,
    pub circuit_code: &'a str,
    pub departure_city: &'a str,
    pub arrival_city: &'a str,
    pub price: f64,
    pub duration: i32,
    pub description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct CircuitEntity {
    pub id: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub name: String,
    pub circuit_code: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub price: f64,
    pub duration: i32,
    pub description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = circuit_schedule)]
pub struct NewCircuitSchedule<'a> {
    pub circuit_id: i64,
    pub position: i32,
    pub day: i32,
    pub destination_id: i64,
    pub description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct CircuitScheduleEntity {
    pub circuit_id: i64,
    pub position: i32,
    pub day: i32,
    pub destination_id: i64,
    pub description: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = circuit_history)]
pub struct CircuitHistoryChangeset {
    pub circuit_id: i64,
    pub departure_date: String,
    pub arrival_date: String,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct CircuitHistoryEntity {
    pub id: i64,
    pub circuit_id: i64,
    pub departure_date: String,
    pub arrival_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = preference)]
pub struct NewPreference {
    pub user_id: i64,
    pub budget: f64,
    pub accommodation: i16,
    pub stars: i16,
    pub forks: i16,
    pub departure_date: String,
    pub arrival_date: String,
    pub departure_city_id: Option<i64>,
    pub arrival_city_id: Option<i64>,
}

#[derive(Queryable)]
pub struct PreferenceEntity {
    pub user_id: i64,
    pub budget: f64,
    pub accommodation: i16,
    pub stars: i16,
    pub forks: i16,
    pub departure_date: String,
    pub arrival_date: String,
    pub departure_city_id: Option<i64>,
    pub arrival_city_id: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = preference_activity_category)]
pub struct NewPreferenceActivityCategory<'a> {
    pub user_id: i64,
    pub position: i32,
    pub label: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = preference_cuisine)]
pub struct NewPreferenceCuisine<'a> {
    pub user_id: i64,
    pub position: i32,
    pub label: &'a str,
}
