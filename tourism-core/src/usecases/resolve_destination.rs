//! Associate points of interest with the destination
//! (i.e. the governorate) they are located in.
//!
//! The association is best-effort: any failure only results in a
//! missing or outdated destination and never in a failed save.

use super::prelude::*;
use crate::{
    gateways::geocode::ReverseGeoCodingGateway,
    util::text::{collapse_whitespace, contains_ignore_case, eq_ignore_case},
};

const REGION_LABEL_PREFIXES: &[&str] = &[
    "Gouvernorat de ",
    "Gouvernorat d'",
    "Gouvernorat d’",
    "Governorate of ",
    "Wilayat ",
    "ولاية ",
];

const REGION_LABEL_SUFFIXES: &[&str] = &[" Governorate"];

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationResolution {
    /// No (valid) position available
    Skipped,
    /// No region found or no destination matched the region
    Unmatched,
    /// The geocoding service could not be asked
    Failed,
    Matched(Destination),
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    eq_ignore_case(head, prefix).then(|| &s[prefix.len()..])
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    eq_ignore_case(tail, suffix).then(|| &s[..split])
}

/// Reduce a region label as returned by a geocoding service
/// to the plain name of the region.
///
/// Applying this function twice yields the same result as
/// applying it once.
pub fn normalize_region_label(label: &str) -> String {
    let mut normalized = collapse_whitespace(label);
    loop {
        let stripped = REGION_LABEL_PREFIXES
            .iter()
            .find_map(|prefix| strip_prefix_ignore_case(&normalized, prefix))
            .or_else(|| {
                REGION_LABEL_SUFFIXES
                    .iter()
                    .find_map(|suffix| strip_suffix_ignore_case(&normalized, suffix))
            })
            .map(collapse_whitespace);
        match stripped {
            Some(stripped) => normalized = stripped,
            None => return normalized,
        }
    }
}

/// Pick the destination whose name contains the (normalized) label.
///
/// An exact match takes precedence, otherwise the destination
/// with the lowest id wins.
pub fn select_destination<'a>(
    candidates: &'a [Destination],
    label: &str,
) -> Option<&'a Destination> {
    let label = normalize_region_label(label);
    if label.is_empty() {
        return None;
    }
    let matches = || {
        candidates
            .iter()
            .filter(|d| contains_ignore_case(&d.name, &label))
    };
    matches()
        .filter(|d| eq_ignore_case(d.name.trim(), &label))
        .min_by_key(|d| d.id)
        .or_else(|| matches().min_by_key(|d| d.id))
}

pub fn resolve_destination<R, G>(
    repo: &R,
    gateway: &G,
    pos: Option<MapPoint>,
) -> Result<DestinationResolution>
where
    R: DestinationRepo,
    G: ReverseGeoCodingGateway + ?Sized,
{
    let Some(pos) = pos.filter(|pos| pos.is_valid()) else {
        log::debug!("Skipping destination resolution without a valid position");
        return Ok(DestinationResolution::Skipped);
    };
    let label = match gateway.resolve_region_label(pos) {
        Ok(Some(label)) => label,
        Ok(None) => {
            log::info!("No region found for position {pos}");
            return Ok(DestinationResolution::Unmatched);
        }
        Err(err) => {
            log::warn!("Failed to resolve the region of position {pos}: {err}");
            return Ok(DestinationResolution::Failed);
        }
    };
    let destinations = repo.all_destinations()?;
    match select_destination(&destinations, &label) {
        Some(destination) => {
            log::debug!(
                "Region '{label}' of position {pos} matches destination '{}'",
                destination.name
            );
            Ok(DestinationResolution::Matched(destination.clone()))
        }
        None => {
            log::info!("No destination found for region '{label}'");
            Ok(DestinationResolution::Unmatched)
        }
    }
}

/// Store the outcome of a destination resolution.
///
/// The destination is derived from the position, i.e. it is
/// cleared if the position has none. After a failed request
/// the stored destination is left as it is.
pub fn assign_destination<R>(repo: &R, poi_id: Id, resolution: &DestinationResolution) -> Result<()>
where
    R: PoiRepo,
{
    let destination = match resolution {
        DestinationResolution::Matched(destination) => Some(destination.id),
        DestinationResolution::Skipped | DestinationResolution::Unmatched => None,
        DestinationResolution::Failed => return Ok(()),
    };
    repo.assign_poi_destination(poi_id, destination)?;
    Ok(())
}
