use super::{create_new_user::clean_profile, prelude::*};

/// Partial update of a profile: Only the given fields are replaced.
#[rustfmt::skip]
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub username    : Option<String>,
    pub firstname   : Option<String>,
    pub lastname    : Option<String>,
    pub phonenumber : Option<String>,
    pub gender      : Option<String>,
    pub dateofbirth : Option<Date>,
    pub location    : Option<String>,
    pub profilepic  : Option<String>,
}

pub fn get_user<R>(repo: &R, actor: Option<&User>, id: Id) -> Result<User>
where
    R: UserRepo,
{
    let user = repo.get_user(id)?;
    authorize(actor, Subject::UserAccount, Ownership::of_user(&user), Action::Read)?;
    Ok(user)
}

pub fn update_profile<R>(repo: &R, actor: Option<&User>, update: ProfileUpdate) -> Result<User>
where
    R: UserRepo,
{
    authorize(actor, Subject::UserAccount, ownership_of(actor), Action::Update)?;
    let mut user = repo.get_user(require_user(actor)?.id)?;
    let ProfileUpdate {
        username,
        firstname,
        lastname,
        phonenumber,
        gender,
        dateofbirth,
        location,
        profilepic,
    } = update;
    let profile = &mut user.profile;
    if username.is_some() {
        profile.username = username;
    }
    if let Some(firstname) = firstname {
        profile.firstname = firstname;
    }
    if let Some(lastname) = lastname {
        profile.lastname = lastname;
    }
    if phonenumber.is_some() {
        profile.phonenumber = phonenumber;
    }
    if gender.is_some() {
        profile.gender = gender;
    }
    if dateofbirth.is_some() {
        profile.dateofbirth = dateofbirth;
    }
    if location.is_some() {
        profile.location = location;
    }
    if profilepic.is_some() {
        profile.profilepic = profilepic;
    }
    user.profile = clean_profile(user.profile);
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    Ok(user)
}

pub fn change_password<R>(
    repo: &R,
    actor: Option<&User>,
    old_password: &str,
    new_password: &str,
) -> Result<()>
where
    R: UserRepo,
{
    authorize(actor, Subject::UserAccount, ownership_of(actor), Action::Update)?;
    let mut user = repo.get_user(require_user(actor)?.id)?;
    if !user.password.verify(old_password) {
        return Err(Error::Credentials);
    }
    user.password = new_password.parse()?;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    log::info!("User #{} changed the password", user.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn partial_profile_update() {
        let db = MockDb::default();
        let user = db.add_user("user@example.tn", Role::User);
        let update = ProfileUpdate {
            location: Some("Sfax".into()),
            firstname: Some(" Youssef ".into()),
            ..Default::default()
        };
        let updated = update_profile(&db, Some(&user), update).unwrap();
        assert_eq!("Youssef", updated.profile.firstname);
        assert_eq!(Some("Sfax".into()), updated.profile.location);
        assert_eq!(user.profile.lastname, updated.profile.lastname);
        assert_eq!(updated, db.get_user(user.id).unwrap());
    }

    #[test]
    fn change_password_requires_the_old_one() {
        let db = MockDb::default();
        let user = db.add_user("user@example.tn", Role::User);
        assert!(matches!(
            change_password(&db, Some(&user), "wrong", "new secret"),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            change_password(&db, Some(&user), MockDb::PASSWORD, "short"),
            Err(Error::Password)
        ));
        change_password(&db, Some(&user), MockDb::PASSWORD, "new secret").unwrap();
        assert!(db.get_user(user.id).unwrap().password.verify("new secret"));
    }

    #[test]
    fn read_other_accounts() {
        let db = MockDb::default();
        let alice = db.add_user("alice@example.tn", Role::User);
        let bob = db.add_user("bob@example.tn", Role::User);
        let admin = db.add_user("admin@example.tn", Role::Admin);
        assert!(get_user(&db, Some(&alice), alice.id).is_ok());
        assert!(get_user(&db, Some(&admin), alice.id).is_ok());
        assert!(matches!(
            get_user(&db, Some(&bob), alice.id),
            Err(Error::Forbidden)
        ));
    }
}
