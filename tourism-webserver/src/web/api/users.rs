use super::*;
use usecases::{BlockBound, Error as ParameterError};

#[post("/users/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: sqlite::Connections,
    new_user: JsonResult<'_, json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner())?;
    let user = flows::register_user(&db, new_user)?;
    let location = format!("/users/{}", user.id);
    Ok(created(location, user.into()))
}

#[post("/users/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<'_, json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            email: &login.email,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {}", login.email, err);
            err
        })?
    };
    let token = jwt_state.generate_token(user.email.as_str())?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/users/logout")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[get("/users/profile")]
pub fn get_profile(db: sqlite::Connections, auth: Auth) -> Result<json::User> {
    let db = db.shared()?;
    let actor = auth.actor(&db)?.ok_or(ParameterError::Unauthorized)?;
    let user = usecases::get_user(&db, Some(&actor), actor.id)?;
    Ok(Json(user.into()))
}

#[put("/users/profile", format = "application/json", data = "<update>")]
pub fn put_profile(
    db: sqlite::Connections,
    auth: Auth,
    update: JsonResult<'_, json::ProfileUpdate>,
) -> Result<json::User> {
    let update = from_json::profile_update(update?.into_inner())?;
    let actor = auth.actor(&db.shared()?)?;
    let user = db.transaction(|conn| usecases::update_profile(conn, actor.as_ref(), update))?;
    Ok(Json(user.into()))
}

#[post(
    "/users/profile/change-password",
    format = "application/json",
    data = "<change>"
)]
pub fn post_change_password(
    db: sqlite::Connections,
    auth: Auth,
    change: JsonResult<'_, json::ChangePassword>,
) -> StatusResult {
    let json::ChangePassword {
        old_password,
        new_password,
    } = change?.into_inner();
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| {
        usecases::change_password(conn, actor.as_ref(), &old_password, &new_password)
    })?;
    Ok(Status::NoContent)
}

#[get("/users")]
pub fn get_users(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    let actor = auth.actor(&db)?;
    let users = usecases::list_users(&db, actor.as_ref())?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/users/<id>")]
pub fn get_user(db: sqlite::Connections, auth: Auth, id: i64) -> Result<json::User> {
    let db = db.shared()?;
    let actor = auth.actor(&db)?;
    let user = usecases::get_user(&db, actor.as_ref(), Id::new(id))?;
    Ok(Json(user.into()))
}

#[delete("/users/<id>")]
pub fn delete_user(db: sqlite::Connections, auth: Auth, id: i64) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_user(conn, actor.as_ref(), Id::new(id)))?;
    Ok(Status::NoContent)
}

fn block_bound(date: Option<&str>, bound: BlockBound) -> result::Result<Option<Timestamp>, ApiError> {
    Ok(date
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| usecases::parse_block_bound(s, bound))
        .transpose()?)
}

#[post("/users/<id>/block", format = "application/json", data = "<period>")]
pub fn post_block_user(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    period: JsonResult<'_, json::BlockPeriod>,
) -> Result<json::User> {
    let period = period?.into_inner();
    let start = block_bound(period.blockstartdate.as_deref(), BlockBound::Start)?;
    let end = block_bound(period.blockenddate.as_deref(), BlockBound::End)?;
    let actor = auth.actor(&db.shared()?)?;
    let user =
        db.transaction(|conn| usecases::block_user(conn, actor.as_ref(), Id::new(id), start, end))?;
    Ok(Json(user.into()))
}
