use super::*;

impl ClickHistoryRepo for DbConnection<'_> {
    fn record_click(&self, user: Id, target: EntityRef, clicked_at: Timestamp) -> Result<Id> {
        record_click(&mut self.conn.borrow_mut(), user, target, clicked_at)
    }
    fn clicks_of_user(&self, user: Id) -> Result<Vec<ClickHistory>> {
        clicks_of_user(&mut self.conn.borrow_mut(), user)
    }
}

impl ClickHistoryRepo for DbReadOnly<'_> {
    fn record_click(&self, _user: Id, _target: EntityRef, _clicked_at: Timestamp) -> Result<Id> {
        Err(read_only())
    }
    fn clicks_of_user(&self, user: Id) -> Result<Vec<ClickHistory>> {
        clicks_of_user(&mut self.conn.borrow_mut(), user)
    }
}

fn record_click(
    conn: &mut SqliteConnection,
    user: Id,
    target: EntityRef,
    clicked_at: Timestamp,
) -> Result<Id> {
    let new_click = models::NewClick {
        user_id: user.to_raw(),
        entity_type: store_enum(target.kind),
        entity_id: target.id.to_raw(),
        clicked_at: clicked_at.as_millis(),
    };
    diesel::insert_into(schema::click_history::table)
        .values(&new_click)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn clicks_of_user(conn: &mut SqliteConnection, user: Id) -> Result<Vec<ClickHistory>> {
    use schema::click_history::dsl;
    dsl::click_history
        .filter(dsl::user_id.eq(user.to_raw()))
        .order_by((dsl::clicked_at.desc(), dsl::id.desc()))
        .load::<models::ClickEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::ClickEntity {
                 id,
                 user_id,
                 entity_type,
                 entity_id,
                 clicked_at,
             }| {
                Ok(ClickHistory {
                    id: id.into(),
                    user: user_id.into(),
                    target: load_entity_ref(entity_type, entity_id)?,
                    clicked_at: Timestamp::from_millis(clicked_at),
                })
            },
        )
        .collect()
}
