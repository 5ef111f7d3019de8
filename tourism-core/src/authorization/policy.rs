//! Access control for all mutating and owner-restricted operations.
//!
//! Every decision is made by [`authorize`] which only depends on the
//! acting user, the kind of subject, who owns the subject and the
//! requested action.

use std::result::Result as StdResult;
use thiserror::Error;
use tourism_entities::{
    id::Id,
    user::{Role, User},
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
}

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Points of interest, destinations and circuits
    Catalog,
    Review,
    Favorite,
    Preference,
    ClickHistory,
    CircuitHistory,
    UserAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Unowned,
    /// A user account is owned by itself.
    OwnedBy { owner: Id, role: Role },
}

impl Ownership {
    pub fn of_user(user: &User) -> Self {
        Self::OwnedBy {
            owner: user.id,
            role: user.role,
        }
    }
}

pub fn authorize(
    actor: Option<&User>,
    subject: Subject,
    ownership: Ownership,
    action: Action,
) -> Result<()> {
    if is_granted(actor, subject, ownership, action) {
        return Ok(());
    }
    if actor.is_some() {
        Err(Error::Forbidden)
    } else {
        Err(Error::Unauthorized)
    }
}

fn is_granted(actor: Option<&User>, subject: Subject, ownership: Ownership, action: Action) -> bool {
    use Action as A;
    use Subject as S;

    let is_authenticated = actor.is_some();
    let is_admin = actor.is_some_and(User::is_admin);
    let is_owner = match (actor, ownership) {
        (Some(user), Ownership::OwnedBy { owner, .. }) => user.id == owner,
        _ => false,
    };
    let owner_is_admin = matches!(
        ownership,
        Ownership::OwnedBy {
            role: Role::Admin,
            ..
        }
    );

    match (subject, action) {
        (S::Catalog | S::Review | S::CircuitHistory, A::Read) => true,
        (S::Catalog, A::Create | A::Update | A::Delete) => is_admin,
        (S::Review | S::CircuitHistory, A::Create) => is_authenticated,
        (S::Review, A::Update) => is_owner,
        (S::Review, A::Delete) => is_owner || (is_admin && !owner_is_admin),
        (S::Favorite | S::Preference | S::ClickHistory, A::Read | A::Create | A::Update | A::Delete) => {
            is_owner
        }
        (S::CircuitHistory, A::Update | A::Delete) => is_admin,
        (S::UserAccount, A::Read) => is_owner || is_admin,
        (S::UserAccount, A::Update) => is_owner,
        (S::UserAccount, A::Delete) => is_admin && !is_owner,
        (S::UserAccount, A::Block) => is_admin && !is_owner && !owner_is_admin,
        (S::UserAccount, A::Create) => false,
        (_, A::Block) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourism_entities::builders::*;

    fn user(id: i64) -> User {
        User::build().id(id).role(Role::User).finish()
    }

    fn admin(id: i64) -> User {
        User::build().id(id).role(Role::Admin).finish()
    }

    #[test]
    fn anyone_can_read_public_subjects() {
        for subject in [Subject::Catalog, Subject::Review, Subject::CircuitHistory] {
            assert!(authorize(None, subject, Ownership::Unowned, Action::Read).is_ok());
        }
    }

    #[test]
    fn anonymous_mutations_are_unauthorized() {
        for action in [Action::Create, Action::Update, Action::Delete] {
            assert_eq!(
                Err(Error::Unauthorized),
                authorize(None, Subject::Catalog, Ownership::Unowned, action)
            );
        }
        assert_eq!(
            Err(Error::Unauthorized),
            authorize(None, Subject::Review, Ownership::Unowned, Action::Create)
        );
    }

    #[test]
    fn only_admins_edit_the_catalog() {
        let u = user(1);
        let a = admin(2);
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&u), Subject::Catalog, Ownership::Unowned, Action::Create)
        );
        assert!(authorize(Some(&a), Subject::Catalog, Ownership::Unowned, Action::Delete).is_ok());
    }

    #[test]
    fn review_deletion() {
        let author = user(1);
        let other = user(2);
        let admin1 = admin(3);
        let admin2 = admin(4);
        let by_user = Ownership::of_user(&author);
        let by_admin = Ownership::of_user(&admin1);

        assert!(authorize(Some(&author), Subject::Review, by_user, Action::Delete).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&other), Subject::Review, by_user, Action::Delete)
        );
        assert!(authorize(Some(&admin2), Subject::Review, by_user, Action::Delete).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&admin2), Subject::Review, by_admin, Action::Delete)
        );
        assert!(authorize(Some(&admin1), Subject::Review, by_admin, Action::Delete).is_ok());
    }

    #[test]
    fn only_the_author_updates_a_review() {
        let author = user(1);
        let a = admin(2);
        let ownership = Ownership::of_user(&author);
        assert!(authorize(Some(&author), Subject::Review, ownership, Action::Update).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&a), Subject::Review, ownership, Action::Update)
        );
    }

    #[test]
    fn favorites_are_private() {
        let owner = user(1);
        let a = admin(2);
        let ownership = Ownership::of_user(&owner);
        assert!(authorize(Some(&owner), Subject::Favorite, ownership, Action::Read).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&a), Subject::Favorite, ownership, Action::Read)
        );
        assert_eq!(
            Err(Error::Unauthorized),
            authorize(None, Subject::Favorite, ownership, Action::Create)
        );
    }

    #[test]
    fn blocking_users() {
        let u = user(1);
        let a1 = admin(2);
        let a2 = admin(3);
        assert!(authorize(Some(&a1), Subject::UserAccount, Ownership::of_user(&u), Action::Block).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&a1), Subject::UserAccount, Ownership::of_user(&a2), Action::Block)
        );
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&a1), Subject::UserAccount, Ownership::of_user(&a1), Action::Block)
        );
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&u), Subject::UserAccount, Ownership::of_user(&u), Action::Block)
        );
    }

    #[test]
    fn user_accounts() {
        let u = user(1);
        let other = user(2);
        let a = admin(3);
        let ownership = Ownership::of_user(&u);
        assert!(authorize(Some(&u), Subject::UserAccount, ownership, Action::Read).is_ok());
        assert!(authorize(Some(&a), Subject::UserAccount, ownership, Action::Read).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&other), Subject::UserAccount, ownership, Action::Read)
        );
        assert!(authorize(Some(&a), Subject::UserAccount, ownership, Action::Delete).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&a), Subject::UserAccount, Ownership::of_user(&a), Action::Delete)
        );
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&a), Subject::UserAccount, ownership, Action::Update)
        );
    }

    #[test]
    fn circuit_history() {
        let u = user(1);
        let a = admin(2);
        assert!(authorize(Some(&u), Subject::CircuitHistory, Ownership::Unowned, Action::Create).is_ok());
        assert_eq!(
            Err(Error::Forbidden),
            authorize(Some(&u), Subject::CircuitHistory, Ownership::Unowned, Action::Delete)
        );
        assert!(authorize(Some(&a), Subject::CircuitHistory, Ownership::Unowned, Action::Delete).is_ok());
    }
}
