use super::*;

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user(&self, id: Id) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
}

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<Id> {
        Err(read_only())
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        Err(read_only())
    }
    fn delete_user(&self, _id: Id) -> Result<()> {
        Err(read_only())
    }
    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
}

fn new_user(u: &User) -> models::NewUser<'_> {
    let User {
        email,
        password,
        role,
        profile,
        block,
        created_at,
        updated_at,
        ..
    } = u;
    models::NewUser {
        email: email.as_str(),
        password: password.as_ref(),
        role: store_enum(*role),
        username: profile.username.as_deref(),
        firstname: &profile.firstname,
        lastname: &profile.lastname,
        phonenumber: profile.phonenumber.as_deref(),
        gender: profile.gender.as_deref(),
        dateofbirth: profile.dateofbirth.map(store_date),
        location: profile.location.as_deref(),
        profilepic: profile.profilepic.as_deref(),
        block_start: block.map(|b| b.start.as_millis()),
        block_end: block.map(|b| b.end.as_millis()),
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        email,
        password,
        role,
        username,
        firstname,
        lastname,
        phonenumber,
        gender,
        dateofbirth,
        location,
        profilepic,
        block_start,
        block_end,
        created_at,
        updated_at,
    } = entity;
    let block = BlockPeriod::try_from_bounds(
        block_start.map(Timestamp::from_millis),
        block_end.map(Timestamp::from_millis),
    );
    Ok(User {
        id: id.into(),
        email: EmailAddress::new_unchecked(email),
        password: Password::from_hash(password),
        role: load_enum("role", role)?,
        profile: Profile {
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth: dateofbirth.as_deref().map(load_date).transpose()?,
            location,
            profilepic,
        },
        block,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<Id> {
    diesel::insert_into(schema::users::table)
        .values(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.to_raw())))
        .set(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_user(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::delete(dsl::users.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id.to_raw()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(entity)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .order_by(dsl::id)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}
