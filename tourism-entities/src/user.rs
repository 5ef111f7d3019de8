use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub email      : EmailAddress,
    pub password   : Password,
    pub role       : Role,
    pub profile    : Profile,
    pub block      : Option<BlockPeriod>,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_blocked_at(&self, now: Timestamp) -> bool {
        self.block.is_some_and(|block| block.contains(now))
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username    : Option<String>,
    pub firstname   : String,
    pub lastname    : String,
    pub phonenumber : Option<String>,
    pub gender      : Option<String>,
    pub dateofbirth : Option<Date>,
    pub location    : Option<String>,
    pub profilepic  : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    User  = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

/// A time window during which a user must not post reviews.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPeriod {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl BlockPeriod {
    /// Returns `None` unless both bounds are given.
    pub fn try_from_bounds(start: Option<Timestamp>, end: Option<Timestamp>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => None,
        }
    }

    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn block_window_is_inclusive() {
        let now = Timestamp::now();
        let block = BlockPeriod {
            start: now,
            end: now + Duration::days(1),
        };
        assert!(block.contains(now));
        assert!(block.contains(now + Duration::days(1)));
        assert!(!block.contains(now - Duration::milliseconds(1)));
        assert!(!block.contains(now + Duration::days(1) + Duration::milliseconds(1)));
    }

    #[test]
    fn incomplete_bounds_never_block() {
        let now = Timestamp::now();
        assert!(BlockPeriod::try_from_bounds(Some(now), None).is_none());
        assert!(BlockPeriod::try_from_bounds(None, Some(now)).is_none());
        assert!(BlockPeriod::try_from_bounds(None, None).is_none());
    }

    #[test]
    fn parse_role() {
        assert_eq!(Role::Admin, "admin".parse().unwrap());
        assert_eq!(Role::User, "User".parse().unwrap());
        assert_eq!("admin", Role::Admin.as_ref());
        assert!("scout".parse::<Role>().is_err());
    }
}
