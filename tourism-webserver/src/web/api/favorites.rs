use super::*;

#[get("/favorites")]
pub fn get_favorites(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Favorite>> {
    let db = db.shared()?;
    let actor = auth.actor(&db)?;
    let favorites = usecases::list_favorites(&db, actor.as_ref())?;
    Ok(Json(favorites.into_iter().map(Into::into).collect()))
}

#[post("/favorites", format = "application/json", data = "<target>")]
pub fn post_favorite(
    db: sqlite::Connections,
    auth: Auth,
    target: JsonResult<'_, json::EntityRef>,
) -> CreatedResult<json::Favorite> {
    let target = target?.into_inner();
    let target = entity_ref(&target.entity_type, target.entity_id)?;
    let actor = auth.actor(&db.shared()?)?;
    let favorite = db.transaction(|conn| usecases::add_favorite(conn, actor.as_ref(), target))?;
    let resolved = usecases::resolve_entity_ref(&db.shared()?, target)?;
    let location = format!("/favorites?entity_type={}&entity_id={}", target.kind, target.id);
    Ok(created(location, (favorite, resolved).into()))
}

#[delete("/favorites?<entity_type>&<entity_id>")]
pub fn delete_favorite(
    db: sqlite::Connections,
    auth: Auth,
    entity_type: &str,
    entity_id: i64,
) -> StatusResult {
    let target = entity_ref(entity_type, entity_id)?;
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::remove_favorite(conn, actor.as_ref(), target))?;
    Ok(Status::NoContent)
}
