use std::sync::Arc;

use rocket::{request::FromParam, FromForm};

use super::*;
use crate::core::util::sort::{PoiSortField, SortDirection};

/// The URL path segment of each kind of point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoiCollection(pub PoiKind);

impl PoiCollection {
    pub const fn path(kind: PoiKind) -> &'static str {
        match kind {
            PoiKind::Hotel => "hotels",
            PoiKind::Restaurant => "restaurants",
            PoiKind::Museum => "museums",
            PoiKind::Activity => "activities",
            PoiKind::Festival => "festivals",
            PoiKind::GuestHouse => "guest_houses",
            PoiKind::ArchaeologicalSite => "archaeological_sites",
        }
    }
}

impl<'a> FromParam<'a> for PoiCollection {
    type Error = &'a str;

    fn from_param(param: &'a str) -> result::Result<Self, Self::Error> {
        let kind = match param {
            "hotels" => PoiKind::Hotel,
            "restaurants" => PoiKind::Restaurant,
            "museums" => PoiKind::Museum,
            "activities" => PoiKind::Activity,
            "festivals" => PoiKind::Festival,
            "guest_houses" => PoiKind::GuestHouse,
            "archaeological_sites" => PoiKind::ArchaeologicalSite,
            _ => return Err(param),
        };
        Ok(Self(kind))
    }
}

#[derive(Debug, Default, FromForm)]
pub struct PoiQueryParams {
    search: Option<String>,
    destination: Option<String>,
    stars: Option<u8>,
    forks: Option<u8>,
    cuisine: Option<String>,
    sort_by: Option<String>,
    sort_direction: Option<String>,
}

impl TryFrom<PoiQueryParams> for usecases::PoiQuery {
    type Error = ApiError;

    fn try_from(from: PoiQueryParams) -> result::Result<Self, Self::Error> {
        let PoiQueryParams {
            search,
            destination,
            stars,
            forks,
            cuisine,
            sort_by,
            sort_direction,
        } = from;
        let sort_by = sort_by
            .as_deref()
            .map(|s| {
                s.parse::<PoiSortField>().map_err(|()| {
                    ApiError::OtherWithStatus(
                        anyhow::anyhow!("Invalid sort field '{s}'"),
                        Status::BadRequest,
                    )
                })
            })
            .transpose()?
            .unwrap_or_default();
        let sort_direction = sort_direction
            .as_deref()
            .map(|s| {
                s.parse::<SortDirection>().map_err(|()| {
                    ApiError::OtherWithStatus(
                        anyhow::anyhow!("Invalid sort direction '{s}'"),
                        Status::BadRequest,
                    )
                })
            })
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            search,
            destination,
            stars,
            forks,
            cuisine,
            sort_by,
            sort_direction,
        })
    }
}

#[get("/<collection>?<query..>")]
pub fn get_pois(
    db: sqlite::Connections,
    collection: PoiCollection,
    query: PoiQueryParams,
) -> Result<Vec<json::Poi>> {
    let query = usecases::PoiQuery::try_from(query)?;
    let pois = usecases::query_pois(&db.shared()?, collection.0, &query)?;
    Ok(Json(pois.into_iter().map(Into::into).collect()))
}

#[get("/<collection>/<id>")]
pub fn get_poi(db: sqlite::Connections, collection: PoiCollection, id: i64) -> Result<json::Poi> {
    let poi = usecases::get_poi(&db.shared()?, collection.0, Id::new(id))?;
    Ok(Json(poi.into()))
}

#[post("/<collection>", format = "application/json", data = "<poi>")]
pub async fn post_poi(
    db: sqlite::Connections,
    auth: Auth,
    geocoding: &State<GeoCoding>,
    collection: PoiCollection,
    poi: JsonResult<'_, json::NewPoi>,
) -> CreatedResult<json::Poi> {
    let props = from_json::try_poi_properties(collection.0, poi?.into_inner())?;
    let actor = auth.actor(&db.shared()?)?;
    let geocoding = Arc::clone(&geocoding.0);
    // The reverse geocoding request blocks
    let poi = rocket::tokio::task::spawn_blocking(move || {
        flows::create_poi(&db, &*geocoding, actor.as_ref(), props)
    })
    .await??;
    let location = format!("/{}/{}", PoiCollection::path(poi.kind()), poi.id);
    Ok(created(location, poi.into()))
}

#[put("/<collection>/<id>", format = "application/json", data = "<poi>")]
pub async fn put_poi(
    db: sqlite::Connections,
    auth: Auth,
    geocoding: &State<GeoCoding>,
    collection: PoiCollection,
    id: i64,
    poi: JsonResult<'_, json::NewPoi>,
) -> Result<json::Poi> {
    let props = from_json::try_poi_properties(collection.0, poi?.into_inner())?;
    let actor = auth.actor(&db.shared()?)?;
    let geocoding = Arc::clone(&geocoding.0);
    let poi = rocket::tokio::task::spawn_blocking(move || {
        flows::update_poi(&db, &*geocoding, actor.as_ref(), Id::new(id), props)
    })
    .await??;
    Ok(Json(poi.into()))
}

#[delete("/<collection>/<id>")]
pub fn delete_poi(
    db: sqlite::Connections,
    auth: Auth,
    collection: PoiCollection,
    id: i64,
) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_poi(conn, actor.as_ref(), collection.0, Id::new(id)))?;
    Ok(Status::NoContent)
}
