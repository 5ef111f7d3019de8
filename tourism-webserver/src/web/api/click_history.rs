use super::*;

#[get("/click_history")]
pub fn get_clicks(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Click>> {
    let db = db.shared()?;
    let actor = auth.actor(&db)?;
    let clicks = usecases::list_clicks(&db, actor.as_ref())?;
    Ok(Json(clicks.into_iter().map(Into::into).collect()))
}

#[post("/click_history", format = "application/json", data = "<target>")]
pub fn post_click(
    db: sqlite::Connections,
    auth: Auth,
    target: JsonResult<'_, json::EntityRef>,
) -> CreatedResult<json::Click> {
    let target = target?.into_inner();
    let target = entity_ref(&target.entity_type, target.entity_id)?;
    let actor = auth.actor(&db.shared()?)?;
    let click = db.transaction(|conn| usecases::record_click(conn, actor.as_ref(), target))?;
    let resolved = usecases::resolve_entity_ref(&db.shared()?, target)?;
    Ok(created("/click_history".to_owned(), (click, resolved).into()))
}
