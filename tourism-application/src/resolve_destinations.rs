use super::*;

use tourism_core::{repositories::PoiRepo, usecases::DestinationResolution};

use crate::store_poi::resolve_and_assign_destination;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DestinationBackfill {
    /// Points of interest with a position but without a destination
    pub candidates: usize,
    pub assigned: usize,
    pub failed: usize,
}

/// Try to find a destination for every point of interest
/// that has a position but no destination (yet).
///
/// A failure for a single point of interest does not abort the run.
pub fn resolve_missing_destinations(
    connections: &sqlite::Connections,
    geocoding: &dyn ReverseGeoCodingGateway,
) -> Result<DestinationBackfill> {
    let pois = connections.shared()?.pois_without_destination()?;
    let mut backfill = DestinationBackfill::default();
    for poi in pois.iter().filter(|poi| poi.pos().is_some()) {
        backfill.candidates += 1;
        match resolve_and_assign_destination(connections, geocoding, poi) {
            Ok(DestinationResolution::Matched(_)) => {
                backfill.assigned += 1;
            }
            Ok(DestinationResolution::Skipped | DestinationResolution::Unmatched) => {
                debug!("No destination found for {} #{}", poi.kind(), poi.id);
            }
            Ok(DestinationResolution::Failed) => {
                backfill.failed += 1;
            }
            Err(err) => {
                backfill.failed += 1;
                warn!(
                    "Failed to assign a destination to {} #{}: {err}",
                    poi.kind(),
                    poi.id
                );
            }
        }
    }
    info!(
        "Assigned destinations to {} of {} points of interest",
        backfill.assigned, backfill.candidates
    );
    Ok(backfill)
}
