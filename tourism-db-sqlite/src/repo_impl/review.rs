use super::*;

impl ReviewRepo for DbConnection<'_> {
    fn create_review(&self, review: &NewReview, created_at: Timestamp) -> Result<Id> {
        create_review(&mut self.conn.borrow_mut(), review, created_at)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: Id) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }
    fn get_review(&self, id: Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn query_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        query_reviews(&mut self.conn.borrow_mut(), query)
    }
}

impl ReviewRepo for DbReadOnly<'_> {
    fn create_review(&self, _review: &NewReview, _created_at: Timestamp) -> Result<Id> {
        Err(read_only())
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        Err(read_only())
    }
    fn delete_review(&self, _id: Id) -> Result<()> {
        Err(read_only())
    }
    fn get_review(&self, id: Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn query_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        query_reviews(&mut self.conn.borrow_mut(), query)
    }
}

fn load_review(entity: models::ReviewEntity) -> Result<Review> {
    let models::ReviewEntity {
        id,
        entity_type,
        entity_id,
        user_id,
        rating,
        comment,
        image,
        created_at,
        updated_at,
    } = entity;
    Ok(Review {
        id: id.into(),
        target: load_entity_ref(entity_type, entity_id)?,
        author: user_id.into(),
        rating: load_small("rating", rating)?.into(),
        comment,
        image,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_review(conn: &mut SqliteConnection, r: &NewReview, created_at: Timestamp) -> Result<Id> {
    let new_review = models::NewReview {
        entity_type: store_enum(r.target.kind),
        entity_id: r.target.id.to_raw(),
        user_id: r.author.to_raw(),
        rating: u8::from(r.rating).into(),
        comment: r.comment.as_deref(),
        image: r.image.as_deref(),
        created_at: created_at.as_millis(),
        updated_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::review::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

// Only the contents of a review are mutable, never
// its author or target.
fn update_review(conn: &mut SqliteConnection, r: &Review) -> Result<()> {
    use schema::review::dsl;
    let changeset = models::ReviewChangeset {
        rating: u8::from(r.rating).into(),
        comment: r.comment.as_deref(),
        image: r.image.as_deref(),
        updated_at: r.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::review.filter(dsl::id.eq(r.id.to_raw())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_review(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::review::dsl;
    let count = diesel::delete(dsl::review.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_review(conn: &mut SqliteConnection, id: Id) -> Result<Review> {
    use schema::review::dsl;
    let entity = dsl::review
        .filter(dsl::id.eq(id.to_raw()))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_review(entity)
}

fn query_reviews(conn: &mut SqliteConnection, query: &ReviewQuery) -> Result<Vec<Review>> {
    use schema::review::dsl;
    let mut q = dsl::review.into_boxed();
    if let Some(kind) = query.kind {
        q = q.filter(dsl::entity_type.eq(store_enum(kind)));
    }
    if let Some(id) = query.id {
        q = q.filter(dsl::entity_id.eq(id.to_raw()));
    }
    q.order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}
