use std::collections::HashSet;

use super::prelude::*;
use crate::util::{
    sort::{sort_pois, PoiSortField, SortDirection},
    text::{contains_ignore_case, non_empty},
};

#[derive(Debug, Default, Clone)]
pub struct PoiQuery {
    /// Searched in both name and description
    pub search: Option<String>,
    /// Searched in the name of the destination
    pub destination: Option<String>,
    /// Only applicable to hotels
    pub stars: Option<u8>,
    /// Only applicable to restaurants
    pub forks: Option<u8>,
    /// Only applicable to restaurants
    pub cuisine: Option<String>,
    pub sort_by: PoiSortField,
    pub sort_direction: SortDirection,
}

fn matches_text(poi: &Poi, text: &str) -> bool {
    contains_ignore_case(&poi.props.name, text)
        || poi
            .props
            .description
            .as_deref()
            .is_some_and(|d| contains_ignore_case(d, text))
}

fn matches_details(poi: &Poi, query: &PoiQuery) -> bool {
    match &poi.props.details {
        PoiDetails::Hotel { stars } => query.stars.is_none() || *stars == query.stars,
        PoiDetails::Restaurant { forks, cuisine, .. } => {
            (query.forks.is_none() || *forks == query.forks)
                && non_empty(query.cuisine.as_deref()).map_or(true, |q| {
                    cuisine.as_deref().is_some_and(|c| contains_ignore_case(c, q))
                })
        }
        _ => true,
    }
}

pub fn query_pois<R>(repo: &R, kind: PoiKind, query: &PoiQuery) -> Result<Vec<Poi>>
where
    R: PoiRepo + DestinationRepo,
{
    let destination_ids = non_empty(query.destination.as_deref())
        .map(|name| -> Result<HashSet<Id>> {
            Ok(repo
                .all_destinations()?
                .into_iter()
                .filter(|d| contains_ignore_case(&d.name, name))
                .map(|d| d.id)
                .collect())
        })
        .transpose()?;
    let search = non_empty(query.search.as_deref());

    let mut pois: Vec<_> = repo
        .all_pois_of_kind(kind)?
        .into_iter()
        .filter(|poi| search.map_or(true, |text| matches_text(poi, text)))
        .filter(|poi| {
            destination_ids
                .as_ref()
                .map_or(true, |ids| poi.destination.is_some_and(|id| ids.contains(&id)))
        })
        .filter(|poi| matches_details(poi, query))
        .collect();
    sort_pois(&mut pois, query.sort_by, query.sort_direction);
    Ok(pois)
}
