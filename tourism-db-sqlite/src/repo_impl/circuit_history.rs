use super::*;

impl CircuitHistoryRepo for DbConnection<'_> {
    fn create_circuit_history(&self, history: &NewCircuitHistory, created_at: Timestamp) -> Result<Id> {
        create_circuit_history(&mut self.conn.borrow_mut(), history, created_at)
    }
    fn update_circuit_history(&self, history: &CircuitHistory) -> Result<()> {
        update_circuit_history(&mut self.conn.borrow_mut(), history)
    }
    fn delete_circuit_history(&self, id: Id) -> Result<()> {
        delete_circuit_history(&mut self.conn.borrow_mut(), id)
    }
    fn get_circuit_history(&self, id: Id) -> Result<CircuitHistory> {
        get_circuit_history(&mut self.conn.borrow_mut(), id)
    }
    fn all_circuit_histories(&self) -> Result<Vec<CircuitHistory>> {
        all_circuit_histories(&mut self.conn.borrow_mut())
    }
}

impl CircuitHistoryRepo for DbReadOnly<'_> {
    fn create_circuit_history(&self, _history: &NewCircuitHistory, _created_at: Timestamp) -> Result<Id> {
        Err(read_only())
    }
    fn update_circuit_history(&self, _history: &CircuitHistory) -> Result<()> {
        Err(read_only())
    }
    fn delete_circuit_history(&self, _id: Id) -> Result<()> {
        Err(read_only())
    }
    fn get_circuit_history(&self, id: Id) -> Result<CircuitHistory> {
        get_circuit_history(&mut self.conn.borrow_mut(), id)
    }
    fn all_circuit_histories(&self) -> Result<Vec<CircuitHistory>> {
        all_circuit_histories(&mut self.conn.borrow_mut())
    }
}

fn load_circuit_history(entity: models::CircuitHistoryEntity) -> Result<CircuitHistory> {
    let models::CircuitHistoryEntity {
        id,
        circuit_id,
        departure_date,
        arrival_date,
        created_at,
        updated_at,
    } = entity;
    Ok(CircuitHistory {
        id: id.into(),
        circuit: circuit_id.into(),
        departure_date: load_date(&departure_date)?,
        arrival_date: load_date(&arrival_date)?,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_circuit_history(
    conn: &mut SqliteConnection,
    h: &NewCircuitHistory,
    created_at: Timestamp,
) -> Result<Id> {
    use schema::circuit_history::dsl;
    let new_history = models::CircuitHistoryChangeset {
        circuit_id: h.circuit.to_raw(),
        departure_date: store_date(h.departure_date),
        arrival_date: store_date(h.arrival_date),
        updated_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::circuit_history::table)
        .values((&new_history, dsl::created_at.eq(created_at.as_millis())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_circuit_history(conn: &mut SqliteConnection, h: &CircuitHistory) -> Result<()> {
    use schema::circuit_history::dsl;
    let changeset = models::CircuitHistoryChangeset {
        circuit_id: h.circuit.to_raw(),
        departure_date: store_date(h.departure_date),
        arrival_date: store_date(h.arrival_date),
        updated_at: h.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::circuit_history.filter(dsl::id.eq(h.id.to_raw())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_circuit_history(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::circuit_history::dsl;
    let count = diesel::delete(dsl::circuit_history.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_circuit_history(conn: &mut SqliteConnection, id: Id) -> Result<CircuitHistory> {
    use schema::circuit_history::dsl;
    let entity = dsl::circuit_history
        .filter(dsl::id.eq(id.to_raw()))
        .first::<models::CircuitHistoryEntity>(conn)
        .map_err(from_diesel_err)?;
    load_circuit_history(entity)
}

fn all_circuit_histories(conn: &mut SqliteConnection) -> Result<Vec<CircuitHistory>> {
    use schema::circuit_history::dsl;
    dsl::circuit_history
        .order_by(dsl::id)
        .load::<models::CircuitHistoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_circuit_history)
        .collect()
}
