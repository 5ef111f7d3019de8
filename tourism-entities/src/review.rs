use crate::{entity::EntityRef, id::Id, time::*};

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub target     : EntityRef,
    pub author     : Id,
    pub rating     : RatingValue,
    pub comment    : Option<String>,
    pub image      : Option<String>,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub target  : EntityRef,
    pub author  : Id,
    pub rating  : RatingValue,
    pub comment : Option<String>,
    pub image   : Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(!RatingValue::from(0).is_valid());
        assert!(RatingValue::from(1).is_valid());
        assert!(RatingValue::from(5).is_valid());
        assert!(!RatingValue::from(6).is_valid());
    }
}
