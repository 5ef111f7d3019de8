use super::*;

#[get("/circuits")]
pub fn get_circuits(db: sqlite::Connections) -> Result<Vec<json::Circuit>> {
    let circuits = usecases::list_circuits(&db.shared()?)?;
    Ok(Json(circuits.into_iter().map(Into::into).collect()))
}

#[get("/circuits/<id>")]
pub fn get_circuit(db: sqlite::Connections, id: i64) -> Result<json::Circuit> {
    let circuit = usecases::get_circuit(&db.shared()?, Id::new(id))?;
    Ok(Json(circuit.into()))
}

#[post("/circuits", format = "application/json", data = "<circuit>")]
pub fn post_circuit(
    db: sqlite::Connections,
    auth: Auth,
    circuit: JsonResult<'_, json::NewCircuit>,
) -> CreatedResult<json::Circuit> {
    let props: CircuitProperties = circuit?.into_inner().into();
    let actor = auth.actor(&db.shared()?)?;
    let circuit = db.transaction(|conn| usecases::create_circuit(conn, actor.as_ref(), props))?;
    let location = format!("/circuits/{}", circuit.id);
    Ok(created(location, circuit.into()))
}

#[put("/circuits/<id>", format = "application/json", data = "<circuit>")]
pub fn put_circuit(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    circuit: JsonResult<'_, json::NewCircuit>,
) -> Result<json::Circuit> {
    let props: CircuitProperties = circuit?.into_inner().into();
    let actor = auth.actor(&db.shared()?)?;
    let circuit =
        db.transaction(|conn| usecases::update_circuit(conn, actor.as_ref(), Id::new(id), props))?;
    Ok(Json(circuit.into()))
}

#[delete("/circuits/<id>")]
pub fn delete_circuit(db: sqlite::Connections, auth: Auth, id: i64) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_circuit(conn, actor.as_ref(), Id::new(id)))?;
    Ok(Status::NoContent)
}
