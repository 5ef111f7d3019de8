use super::*;

#[get("/destinations?<search>")]
pub fn get_destinations(
    db: sqlite::Connections,
    search: Option<String>,
) -> Result<Vec<json::Destination>> {
    let destinations = usecases::search_destinations(&db.shared()?, search.as_deref())?;
    Ok(Json(destinations.into_iter().map(Into::into).collect()))
}

#[get("/destinations/<id>")]
pub fn get_destination(db: sqlite::Connections, id: i64) -> Result<json::Destination> {
    let destination = usecases::get_destination(&db.shared()?, Id::new(id))?;
    Ok(Json(destination.into()))
}

#[post("/destinations", format = "application/json", data = "<destination>")]
pub fn post_destination(
    db: sqlite::Connections,
    auth: Auth,
    destination: JsonResult<'_, json::NewDestination>,
) -> CreatedResult<json::Destination> {
    let new_destination: NewDestination = destination?.into_inner().into();
    let actor = auth.actor(&db.shared()?)?;
    let destination = db.transaction(|conn| {
        usecases::create_destination(conn, actor.as_ref(), new_destination)
    })?;
    let location = format!("/destinations/{}", destination.id);
    Ok(created(location, destination.into()))
}

#[put("/destinations/<id>", format = "application/json", data = "<destination>")]
pub fn put_destination(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    destination: JsonResult<'_, json::NewDestination>,
) -> Result<json::Destination> {
    let destination = from_json::destination(Id::new(id), destination?.into_inner());
    let actor = auth.actor(&db.shared()?)?;
    let destination = db.transaction(|conn| {
        usecases::update_destination(conn, actor.as_ref(), destination)
    })?;
    Ok(Json(destination.into()))
}

#[delete("/destinations/<id>")]
pub fn delete_destination(db: sqlite::Connections, auth: Auth, id: i64) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_destination(conn, actor.as_ref(), Id::new(id)))?;
    Ok(Status::NoContent)
}
