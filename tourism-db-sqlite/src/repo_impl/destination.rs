use super::*;

impl DestinationRepo for DbConnection<'_> {
    fn create_destination(&self, destination: &NewDestination) -> Result<Id> {
        create_destination(&mut self.conn.borrow_mut(), destination)
    }
    fn update_destination(&self, destination: &Destination) -> Result<()> {
        update_destination(&mut self.conn.borrow_mut(), destination)
    }
    fn delete_destination(&self, id: Id) -> Result<()> {
        delete_destination(&mut self.conn.borrow_mut(), id)
    }
    fn get_destination(&self, id: Id) -> Result<Destination> {
        get_destination(&mut self.conn.borrow_mut(), id)
    }
    fn all_destinations(&self) -> Result<Vec<Destination>> {
        all_destinations(&mut self.conn.borrow_mut())
    }
}

impl DestinationRepo for DbReadOnly<'_> {
    fn create_destination(&self, _destination: &NewDestination) -> Result<Id> {
        Err(read_only())
    }
    fn update_destination(&self, _destination: &Destination) -> Result<()> {
        Err(read_only())
    }
    fn delete_destination(&self, _id: Id) -> Result<()> {
        Err(read_only())
    }
    fn get_destination(&self, id: Id) -> Result<Destination> {
        get_destination(&mut self.conn.borrow_mut(), id)
    }
    fn all_destinations(&self) -> Result<Vec<Destination>> {
        all_destinations(&mut self.conn.borrow_mut())
    }
}

impl From<models::DestinationEntity> for Destination {
    fn from(from: models::DestinationEntity) -> Self {
        let models::DestinationEntity {
            id,
            name,
            latitude,
            longitude,
        } = from;
        Self {
            id: id.into(),
            name,
            latitude,
            longitude,
        }
    }
}

fn create_destination(conn: &mut SqliteConnection, d: &NewDestination) -> Result<Id> {
    let new_destination = models::NewDestination {
        name: &d.name,
        latitude: d.latitude,
        longitude: d.longitude,
    };
    diesel::insert_into(schema::destination::table)
        .values(&new_destination)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_destination(conn: &mut SqliteConnection, d: &Destination) -> Result<()> {
    use schema::destination::dsl;
    let changeset = models::NewDestination {
        name: &d.name,
        latitude: d.latitude,
        longitude: d.longitude,
    };
    let count = diesel::update(dsl::destination.filter(dsl::id.eq(d.id.to_raw())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_destination(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::destination::dsl;
    let count = diesel::delete(dsl::destination.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_destination(conn: &mut SqliteConnection, id: Id) -> Result<Destination> {
    use schema::destination::dsl;
    Ok(dsl::destination
        .filter(dsl::id.eq(id.to_raw()))
        .first::<models::DestinationEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_destinations(conn: &mut SqliteConnection) -> Result<Vec<Destination>> {
    use schema::destination::dsl;
    Ok(dsl::destination
        .order_by(dsl::id)
        .load::<models::DestinationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
