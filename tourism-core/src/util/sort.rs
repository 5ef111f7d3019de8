use std::{cmp::Ordering, str::FromStr};

use tourism_entities::poi::Poi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoiSortField {
    #[default]
    Price,
    Name,
    CreatedAt,
}

impl FromStr for PoiSortField {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "name" => Ok(Self::Name),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(()),
        }
    }
}

// Missing values are always sorted last
fn cmp_opt<T: PartialOrd>(lhs: Option<T>, rhs: Option<T>, dir: SortDirection) -> Ordering {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => {
            let ord = lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal);
            match dir {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort with the id as the final tie-breaker.
pub fn sort_pois(pois: &mut [Poi], field: PoiSortField, dir: SortDirection) {
    pois.sort_by(|lhs, rhs| {
        let ord = match field {
            PoiSortField::Price => cmp_opt(lhs.props.price, rhs.props.price, dir),
            PoiSortField::Name => cmp_opt(
                Some(lhs.props.name.to_lowercase()),
                Some(rhs.props.name.to_lowercase()),
                dir,
            ),
            PoiSortField::CreatedAt => cmp_opt(Some(lhs.created_at), Some(rhs.created_at), dir),
        };
        ord.then_with(|| lhs.id.cmp(&rhs.id))
    });
}
