use super::*;

#[get("/preferences")]
pub fn get_preference(db: sqlite::Connections, auth: Auth) -> Result<json::Preference> {
    let db = db.shared()?;
    let actor = auth.actor(&db)?;
    let preference = usecases::get_preference(&db, actor.as_ref())?;
    Ok(Json(preference.into()))
}

/// Create or replace the preference of the current user.
#[put("/preferences", format = "application/json", data = "<preference>")]
pub fn put_preference(
    db: sqlite::Connections,
    auth: Auth,
    preference: JsonResult<'_, json::Preference>,
) -> Result<json::Preference> {
    let preference = preference?.into_inner();
    let actor = auth.actor(&db.shared()?)?;
    let preference = db.transaction(|conn| {
        usecases::save_preference(
            conn,
            actor.as_ref(),
            from_json::preference_params(&preference),
        )
    })?;
    Ok(Json(preference.into()))
}

#[delete("/preferences")]
pub fn delete_preference(db: sqlite::Connections, auth: Auth) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_preference(conn, actor.as_ref()))?;
    Ok(Status::NoContent)
}
