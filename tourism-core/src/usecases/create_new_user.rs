use super::prelude::*;
use crate::util::{text::non_empty, validate};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub profile: Profile,
}

pub(crate) fn clean_profile(mut profile: Profile) -> Profile {
    let opt = |s: Option<String>| non_empty(s.as_deref()).map(ToOwned::to_owned);
    profile.username = opt(profile.username);
    profile.firstname = profile.firstname.trim().to_owned();
    profile.lastname = profile.lastname.trim().to_owned();
    profile.phonenumber = opt(profile.phonenumber);
    profile.gender = opt(profile.gender);
    profile.location = opt(profile.location);
    profile.profilepic = opt(profile.profilepic);
    profile
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser, role: Role) -> Result<User> {
    let email = u.email.parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::Email);
    }
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let now = Timestamp::now();
    let mut new_user = User {
        id: Id::new(0),
        email,
        password,
        role,
        profile: clean_profile(u.profile),
        block: None,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    new_user.id = repo.create_user(&new_user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    Ok(new_user)
}

/// Public registration, always with the role of a regular user.
pub fn register_with_email<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    create_new_user(repo, u, Role::User)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: password.into(),
            profile: Profile {
                firstname: " Amira ".into(),
                lastname: "Ben Salah".into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(register_with_email(&db, new_user("foo@bar.tn", "secret1")).is_ok());
        assert!(register_with_email(&db, new_user("baz@bar.tn", "secret2")).is_ok());
        assert_eq!(2, db.users.borrow().len());
        assert!(db
            .try_get_user_by_email(&EmailAddress::new_unchecked("baz@bar.tn".into()))
            .unwrap()
            .is_some());
    }

    #[test]
    fn registered_users_are_no_admins() {
        let db = MockDb::default();
        let user = register_with_email(&db, new_user("foo@bar.tn", "secret1")).unwrap();
        assert_eq!(Role::User, user.role);
        assert_eq!("Amira", user.profile.firstname);
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        assert!(matches!(
            register_with_email(&db, new_user("foo@baz.tn", "hello")),
            Err(Error::Password)
        ));
        assert!(register_with_email(&db, new_user("foo@baz.tn", "valid pass")).is_ok());
    }

    #[test]
    fn create_user_with_invalid_email() {
        let db = MockDb::default();
        assert!(matches!(
            register_with_email(&db, new_user("", "secret")),
            Err(Error::Email)
        ));
        assert!(matches!(
            register_with_email(&db, new_user("fooo@", "secret")),
            Err(Error::Email)
        ));
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        register_with_email(&db, new_user("baz@foo.tn", "secret")).unwrap();
        assert!(matches!(
            register_with_email(&db, new_user("baz@FOO.tn", "secret")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        register_with_email(&db, new_user("foo@bar.tn", "secret")).unwrap();
        assert!(db.users.borrow()[0].password.as_ref() != "secret");
        assert!(db.users.borrow()[0].password.verify("secret"));
    }
}
