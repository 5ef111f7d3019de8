use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, status, Responder},
    routes, Route, State,
};
use tourism_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite},
};
use tourism_application::prelude as flows;

mod circuit_history;
mod circuits;
mod click_history;
mod destinations;
mod error;
mod favorites;
mod pois;
mod preferences;
mod reviews;
mod users;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<status::Created<Json<T>>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   points of interest   --- //
        pois::get_pois,
        pois::get_poi,
        pois::post_poi,
        pois::put_poi,
        pois::delete_poi,
        // ---   destinations   --- //
        destinations::get_destinations,
        destinations::get_destination,
        destinations::post_destination,
        destinations::put_destination,
        destinations::delete_destination,
        // ---   circuits   --- //
        circuits::get_circuits,
        circuits::get_circuit,
        circuits::post_circuit,
        circuits::put_circuit,
        circuits::delete_circuit,
        // ---   circuit history   --- //
        circuit_history::get_circuit_histories,
        circuit_history::get_circuit_history,
        circuit_history::post_circuit_history,
        circuit_history::put_circuit_history,
        circuit_history::delete_circuit_history,
        // ---   reviews   --- //
        reviews::get_reviews,
        reviews::get_review,
        reviews::post_review,
        reviews::put_review,
        reviews::delete_review,
        // ---   favorites   --- //
        favorites::get_favorites,
        favorites::post_favorite,
        favorites::delete_favorite,
        // ---   click history   --- //
        click_history::get_clicks,
        click_history::post_click,
        // ---   preferences   --- //
        preferences::get_preference,
        preferences::put_preference,
        preferences::delete_preference,
        // ---   users   --- //
        users::post_register,
        users::post_login,
        users::post_logout,
        users::get_profile,
        users::put_profile,
        users::post_change_password,
        users::get_users,
        users::get_user,
        users::delete_user,
        users::post_block_user,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Parse the `entity_type` of a request.
fn entity_ref(entity_type: &str, entity_id: i64) -> result::Result<EntityRef, ApiError> {
    from_json::try_entity_ref(entity_type, entity_id).ok_or_else(|| {
        ApiError::OtherWithStatus(
            anyhow::anyhow!("Unknown entity type '{entity_type}'"),
            Status::BadRequest,
        )
    })
}

fn created<T>(location: String, body: T) -> status::Created<Json<T>> {
    status::Created::new(location).body(Json(body))
}
