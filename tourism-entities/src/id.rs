use std::{fmt, num::ParseIntError, str::FromStr};

/// Numeric row identifier as exposed by the public API.
///
/// Identifiers are assigned by the storage backend on insert and
/// are only unique within the table of a single entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(i64);

impl Id {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> i64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Id {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Id> for i64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id() {
        assert_eq!(Id::new(42), "42".parse().unwrap());
        assert_eq!(Id::new(7), " 7 ".parse().unwrap());
        assert!("x".parse::<Id>().is_err());
        assert!(!Id::new(0).is_valid());
    }
}
