use super::*;

#[get("/circuit_history")]
pub fn get_circuit_histories(db: sqlite::Connections) -> Result<Vec<json::CircuitHistory>> {
    let histories = usecases::list_circuit_histories(&db.shared()?)?;
    Ok(Json(histories.into_iter().map(Into::into).collect()))
}

#[get("/circuit_history/<id>")]
pub fn get_circuit_history(db: sqlite::Connections, id: i64) -> Result<json::CircuitHistory> {
    let history = usecases::get_circuit_history(&db.shared()?, Id::new(id))?;
    Ok(Json(history.into()))
}

#[post("/circuit_history", format = "application/json", data = "<history>")]
pub fn post_circuit_history(
    db: sqlite::Connections,
    auth: Auth,
    history: JsonResult<'_, json::NewCircuitHistory>,
) -> CreatedResult<json::CircuitHistory> {
    let history = history?.into_inner();
    let actor = auth.actor(&db.shared()?)?;
    let history = db.transaction(|conn| {
        usecases::create_circuit_history(
            conn,
            actor.as_ref(),
            &from_json::circuit_history_params(&history),
        )
    })?;
    let location = format!("/circuit_history/{}", history.id);
    Ok(created(location, history.into()))
}

#[put("/circuit_history/<id>", format = "application/json", data = "<history>")]
pub fn put_circuit_history(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    history: JsonResult<'_, json::NewCircuitHistory>,
) -> Result<json::CircuitHistory> {
    let history = history?.into_inner();
    let actor = auth.actor(&db.shared()?)?;
    let history = db.transaction(|conn| {
        usecases::update_circuit_history(
            conn,
            actor.as_ref(),
            Id::new(id),
            &from_json::circuit_history_params(&history),
        )
    })?;
    Ok(Json(history.into()))
}

#[delete("/circuit_history/<id>")]
pub fn delete_circuit_history(db: sqlite::Connections, auth: Auth, id: i64) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_circuit_history(conn, actor.as_ref(), Id::new(id)))?;
    Ok(Status::NoContent)
}
