use super::*;

impl PreferenceRepo for DbConnection<'_> {
    fn try_get_preference(&self, user: Id) -> Result<Option<Preference>> {
        try_get_preference(&mut self.conn.borrow_mut(), user)
    }
    fn save_preference(&self, preference: &Preference) -> Result<()> {
        save_preference(&mut self.conn.borrow_mut(), preference)
    }
    fn delete_preference(&self, user: Id) -> Result<()> {
        delete_preference(&mut self.conn.borrow_mut(), user)
    }
}

impl PreferenceRepo for DbReadOnly<'_> {
    fn try_get_preference(&self, user: Id) -> Result<Option<Preference>> {
        try_get_preference(&mut self.conn.borrow_mut(), user)
    }
    fn save_preference(&self, _preference: &Preference) -> Result<()> {
        Err(read_only())
    }
    fn delete_preference(&self, _user: Id) -> Result<()> {
        Err(read_only())
    }
}

fn load_activity_categories(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<String>> {
    use schema::preference_activity_category::dsl;
    dsl::preference_activity_category
        .select(dsl::label)
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::position)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_cuisines(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<String>> {
    use schema::preference_cuisine::dsl;
    dsl::preference_cuisine
        .select(dsl::label)
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::position)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn try_get_preference(conn: &mut SqliteConnection, user: Id) -> Result<Option<Preference>> {
    use schema::preference::dsl;
    let Some(entity) = dsl::preference
        .filter(dsl::user_id.eq(user.to_raw()))
        .first::<models::PreferenceEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
    else {
        return Ok(None);
    };
    let models::PreferenceEntity {
        user_id,
        budget,
        accommodation,
        stars,
        forks,
        departure_date,
        arrival_date,
        departure_city_id,
        arrival_city_id,
    } = entity;
    Ok(Some(Preference {
        user: user_id.into(),
        budget,
        accommodation: load_enum("accommodation", accommodation)?,
        stars: load_small("stars", stars)?,
        forks: load_small("forks", forks)?,
        departure_date: load_date(&departure_date)?,
        arrival_date: load_date(&arrival_date)?,
        departure_city: departure_city_id.map(Into::into),
        arrival_city: arrival_city_id.map(Into::into),
        activity_categories: load_activity_categories(conn, user_id)?,
        cuisines: load_cuisines(conn, user_id)?,
    }))
}

fn save_preference(conn: &mut SqliteConnection, p: &Preference) -> Result<()> {
    // Replace the whole preference including all labels
    let user_id = p.user.to_raw();
    delete_preference_if_exists(conn, user_id)?;
    let new_preference = models::NewPreference {
        user_id,
        budget: p.budget,
        accommodation: store_enum(p.accommodation),
        stars: p.stars.into(),
        forks: p.forks.into(),
        departure_date: store_date(p.departure_date),
        arrival_date: store_date(p.arrival_date),
        departure_city_id: p.departure_city.map(Id::to_raw),
        arrival_city_id: p.arrival_city.map(Id::to_raw),
    };
    diesel::insert_into(schema::preference::table)
        .values(&new_preference)
        .execute(conn)
        .map_err(from_diesel_err)?;
    for (position, label) in p.activity_categories.iter().enumerate() {
        diesel::insert_into(schema::preference_activity_category::table)
            .values(&models::NewPreferenceActivityCategory {
                user_id,
                position: position as i32,
                label,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for (position, label) in p.cuisines.iter().enumerate() {
        diesel::insert_into(schema::preference_cuisine::table)
            .values(&models::NewPreferenceCuisine {
                user_id,
                position: position as i32,
                label,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn delete_preference_if_exists(conn: &mut SqliteConnection, user_id: i64) -> Result<usize> {
    use schema::{
        preference::dsl, preference_activity_category::dsl as category_dsl,
        preference_cuisine::dsl as cuisine_dsl,
    };
    diesel::delete(category_dsl::preference_activity_category.filter(category_dsl::user_id.eq(user_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(cuisine_dsl::preference_cuisine.filter(cuisine_dsl::user_id.eq(user_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(dsl::preference.filter(dsl::user_id.eq(user_id)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_preference(conn: &mut SqliteConnection, user: Id) -> Result<()> {
    let count = delete_preference_if_exists(conn, user.to_raw())?;
    expect_single_row(count)
}
