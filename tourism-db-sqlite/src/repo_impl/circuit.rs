use super::*;

impl CircuitRepo for DbConnection<'_> {
    fn create_circuit(&self, props: &CircuitProperties, created_at: Timestamp) -> Result<Id> {
        create_circuit(&mut self.conn.borrow_mut(), props, created_at)
    }
    fn update_circuit(&self, id: Id, props: &CircuitProperties, updated_at: Timestamp) -> Result<()> {
        update_circuit(&mut self.conn.borrow_mut(), id, props, updated_at)
    }
    fn delete_circuit(&self, id: Id) -> Result<()> {
        delete_circuit(&mut self.conn.borrow_mut(), id)
    }
    fn get_circuit(&self, id: Id) -> Result<Circuit> {
        get_circuit(&mut self.conn.borrow_mut(), id)
    }
    fn all_circuits(&self) -> Result<Vec<Circuit>> {
        all_circuits(&mut self.conn.borrow_mut())
    }
}

impl CircuitRepo for DbReadOnly<'_> {
    fn create_circuit(&self, _props: &CircuitProperties, _created_at: Timestamp) -> Result<Id> {
        Err(read_only())
    }
    fn update_circuit(&self, _id: Id, _props: &CircuitProperties, _updated_at: Timestamp) -> Result<()> {
        Err(read_only())
    }
    fn delete_circuit(&self, _id: Id) -> Result<()> {
        Err(read_only())
    }
    fn get_circuit(&self, id: Id) -> Result<Circuit> {
        get_circuit(&mut self.conn.borrow_mut(), id)
    }
    fn all_circuits(&self) -> Result<Vec<Circuit>> {
        all_circuits(&mut self.conn.borrow_mut())
    }
}

fn circuit_changeset(props: &CircuitProperties, updated_at: Timestamp) -> models::CircuitChangeset<'_> {
    models::CircuitChangeset {
        updated_at: updated_at.as_millis(),
        name: &props.name,
        circuit_code: &props.circuit_code,
        departure_city: &props.departure_city,
        arrival_city: &props.arrival_city,
        price: props.price,
        duration: props.duration.into(),
        description: props.description.as_deref(),
    }
}

fn insert_schedules(conn: &mut SqliteConnection, circuit_id: i64, schedules: &[CircuitSchedule]) -> Result<()> {
    let new_schedules = schedules
        .iter()
        .enumerate()
        .map(|(position, s)| models::NewCircuitSchedule {
            circuit_id,
            position: position as i32,
            day: s.day.into(),
            destination_id: s.destination.to_raw(),
            description: s.description.as_deref(),
        })
        .collect::<Vec<_>>();
    for new_schedule in &new_schedules {
        diesel::insert_into(schema::circuit_schedule::table)
            .values(new_schedule)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn load_schedules(conn: &mut SqliteConnection, circuit_id: i64) -> Result<Vec<CircuitSchedule>> {
    use schema::circuit_schedule::dsl;
    dsl::circuit_schedule
        .filter(dsl::circuit_id.eq(circuit_id))
        .order_by(dsl::position)
        .load::<models::CircuitScheduleEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::CircuitScheduleEntity {
                 day,
                 destination_id,
                 description,
                 ..
             }| {
                Ok(CircuitSchedule {
                    day: load_u16("day of schedule", day)?,
                    destination: destination_id.into(),
                    description,
                })
            },
        )
        .collect()
}

fn load_circuit(conn: &mut SqliteConnection, entity: models::CircuitEntity) -> Result<Circuit> {
    let models::CircuitEntity {
        id,
        created_at,
        updated_at,
        name,
        circuit_code,
        departure_city,
        arrival_city,
        price,
        duration,
        description,
    } = entity;
    let schedules = load_schedules(conn, id)?;
    Ok(Circuit {
        id: id.into(),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
        props: CircuitProperties {
            name,
            circuit_code,
            departure_city,
            arrival_city,
            price,
            duration: load_u16("duration", duration)?,
            description,
            schedules,
        },
    })
}

fn create_circuit(conn: &mut SqliteConnection, props: &CircuitProperties, created_at: Timestamp) -> Result<Id> {
    use schema::circuit::dsl;
    diesel::insert_into(schema::circuit::table)
        .values((
            &circuit_changeset(props, created_at),
            dsl::created_at.eq(created_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    insert_schedules(conn, id.to_raw(), &props.schedules)?;
    Ok(id)
}

fn update_circuit(
    conn: &mut SqliteConnection,
    id: Id,
    props: &CircuitProperties,
    updated_at: Timestamp,
) -> Result<()> {
    use schema::{circuit::dsl, circuit_schedule::dsl as schedule_dsl};
    let count = diesel::update(dsl::circuit.filter(dsl::id.eq(id.to_raw())))
        .set(&circuit_changeset(props, updated_at))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    diesel::delete(schedule_dsl::circuit_schedule.filter(schedule_dsl::circuit_id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_schedules(conn, id.to_raw(), &props.schedules)
}

fn delete_circuit(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::circuit::dsl;
    // Schedules and histories are deleted by cascade
    let count = diesel::delete(dsl::circuit.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_circuit(conn: &mut SqliteConnection, id: Id) -> Result<Circuit> {
    use schema::circuit::dsl;
    let entity = dsl::circuit
        .filter(dsl::id.eq(id.to_raw()))
        .first::<models::CircuitEntity>(conn)
        .map_err(from_diesel_err)?;
    load_circuit(conn, entity)
}

fn all_circuits(conn: &mut SqliteConnection) -> Result<Vec<Circuit>> {
    use schema::circuit::dsl;
    let entities = dsl::circuit
        .order_by(dsl::id)
        .load::<models::CircuitEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_circuit(conn, entity))
        .collect()
}
