use super::*;

impl FavoriteRepo for DbConnection<'_> {
    fn create_favorite(&self, user: Id, target: EntityRef, created_at: Timestamp) -> Result<Id> {
        create_favorite(&mut self.conn.borrow_mut(), user, target, created_at)
    }
    fn delete_favorite(&self, user: Id, target: EntityRef) -> Result<()> {
        delete_favorite(&mut self.conn.borrow_mut(), user, target)
    }
    fn try_get_favorite(&self, user: Id, target: EntityRef) -> Result<Option<Favorite>> {
        try_get_favorite(&mut self.conn.borrow_mut(), user, target)
    }
    fn favorites_of_user(&self, user: Id) -> Result<Vec<Favorite>> {
        favorites_of_user(&mut self.conn.borrow_mut(), user)
    }
}

impl FavoriteRepo for DbReadOnly<'_> {
    fn create_favorite(&self, _user: Id, _target: EntityRef, _created_at: Timestamp) -> Result<Id> {
        Err(read_only())
    }
    fn delete_favorite(&self, _user: Id, _target: EntityRef) -> Result<()> {
        Err(read_only())
    }
    fn try_get_favorite(&self, user: Id, target: EntityRef) -> Result<Option<Favorite>> {
        try_get_favorite(&mut self.conn.borrow_mut(), user, target)
    }
    fn favorites_of_user(&self, user: Id) -> Result<Vec<Favorite>> {
        favorites_of_user(&mut self.conn.borrow_mut(), user)
    }
}

fn load_favorite(entity: models::FavoriteEntity) -> Result<Favorite> {
    let models::FavoriteEntity {
        id,
        user_id,
        entity_type,
        entity_id,
        created_at,
    } = entity;
    Ok(Favorite {
        id: id.into(),
        user: user_id.into(),
        target: load_entity_ref(entity_type, entity_id)?,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_favorite(
    conn: &mut SqliteConnection,
    user: Id,
    target: EntityRef,
    created_at: Timestamp,
) -> Result<Id> {
    let new_favorite = models::NewFavorite {
        user_id: user.to_raw(),
        entity_type: store_enum(target.kind),
        entity_id: target.id.to_raw(),
        created_at: created_at.as_millis(),
    };
    // A duplicate is rejected by the unique index
    diesel::insert_into(schema::favorite::table)
        .values(&new_favorite)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn delete_favorite(conn: &mut SqliteConnection, user: Id, target: EntityRef) -> Result<()> {
    use schema::favorite::dsl;
    let count = diesel::delete(
        dsl::favorite
            .filter(dsl::user_id.eq(user.to_raw()))
            .filter(dsl::entity_type.eq(store_enum(target.kind)))
            .filter(dsl::entity_id.eq(target.id.to_raw())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn try_get_favorite(
    conn: &mut SqliteConnection,
    user: Id,
    target: EntityRef,
) -> Result<Option<Favorite>> {
    use schema::favorite::dsl;
    dsl::favorite
        .filter(dsl::user_id.eq(user.to_raw()))
        .filter(dsl::entity_type.eq(store_enum(target.kind)))
        .filter(dsl::entity_id.eq(target.id.to_raw()))
        .first::<models::FavoriteEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_favorite)
        .transpose()
}

fn favorites_of_user(conn: &mut SqliteConnection, user: Id) -> Result<Vec<Favorite>> {
    use schema::favorite::dsl;
    dsl::favorite
        .filter(dsl::user_id.eq(user.to_raw()))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::FavoriteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_favorite)
        .collect()
}
