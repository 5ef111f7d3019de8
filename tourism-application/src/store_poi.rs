use super::*;

use tourism_core::{
    repositories::{DestinationRepo, Error as RepoError},
    usecases::DestinationResolution,
};

type RepoResult<T> = std::result::Result<T, RepoError>;

// Acquires a new read-only connection for every request, i.e.
// no database lock is held while waiting for the geocoding service.
struct DestinationsOnDemand<'a>(&'a sqlite::Connections);

fn not_supported() -> RepoError {
    RepoError::Other(anyhow::anyhow!("Destinations are not modifiable"))
}

impl DestinationRepo for DestinationsOnDemand<'_> {
    fn create_destination(&self, _destination: &NewDestination) -> RepoResult<Id> {
        Err(not_supported())
    }
    fn update_destination(&self, _destination: &Destination) -> RepoResult<()> {
        Err(not_supported())
    }
    fn delete_destination(&self, _id: Id) -> RepoResult<()> {
        Err(not_supported())
    }
    fn get_destination(&self, id: Id) -> RepoResult<Destination> {
        self.0.shared()?.get_destination(id)
    }
    fn all_destinations(&self) -> RepoResult<Vec<Destination>> {
        self.0.shared()?.all_destinations()
    }
}

pub fn create_poi(
    connections: &sqlite::Connections,
    geocoding: &dyn ReverseGeoCodingGateway,
    actor: Option<&User>,
    props: PoiProperties,
) -> Result<Poi> {
    let poi = connections.exclusive()?.transaction(|conn| {
        usecases::create_poi(conn, actor, props).map_err(|err| {
            warn!("Failed to create a new point of interest: {err}");
            err
        })
    })?;
    Ok(with_resolved_destination(connections, geocoding, poi))
}

pub fn update_poi(
    connections: &sqlite::Connections,
    geocoding: &dyn ReverseGeoCodingGateway,
    actor: Option<&User>,
    id: Id,
    props: PoiProperties,
) -> Result<Poi> {
    let poi = connections.exclusive()?.transaction(|conn| {
        usecases::update_poi(conn, actor, id, props).map_err(|err| {
            warn!("Failed to update point of interest #{id}: {err}");
            err
        })
    })?;
    Ok(with_resolved_destination(connections, geocoding, poi))
}

/// Runs after the point of interest has been stored and
/// never fails: Errors are only logged.
fn with_resolved_destination(
    connections: &sqlite::Connections,
    geocoding: &dyn ReverseGeoCodingGateway,
    mut poi: Poi,
) -> Poi {
    match resolve_and_assign_destination(connections, geocoding, &poi) {
        Ok(DestinationResolution::Matched(destination)) => {
            poi.destination = Some(destination.id);
        }
        Ok(DestinationResolution::Skipped | DestinationResolution::Unmatched) => {
            poi.destination = None;
        }
        Ok(DestinationResolution::Failed) => {}
        Err(err) => {
            warn!(
                "Failed to assign a destination to point of interest #{}: {err}",
                poi.id
            );
        }
    }
    poi
}

/// Resolve the destination from the current position and store it.
///
/// An outdated destination is removed if the position has no
/// matching destination. It is kept if the geocoding service
/// could not be asked.
pub(crate) fn resolve_and_assign_destination(
    connections: &sqlite::Connections,
    geocoding: &dyn ReverseGeoCodingGateway,
    poi: &Poi,
) -> Result<DestinationResolution> {
    let resolution =
        usecases::resolve_destination(&DestinationsOnDemand(connections), geocoding, poi.pos())?;
    let needs_update = match &resolution {
        DestinationResolution::Matched(destination) => poi.destination != Some(destination.id),
        DestinationResolution::Skipped | DestinationResolution::Unmatched => {
            poi.destination.is_some()
        }
        DestinationResolution::Failed => false,
    };
    if !needs_update {
        return Ok(resolution);
    }
    connections
        .exclusive()?
        .transaction(|conn| usecases::assign_destination(conn, poi.id, &resolution))?;
    match &resolution {
        DestinationResolution::Matched(destination) => info!(
            "Assigned destination '{}' to point of interest #{}",
            destination.name, poi.id
        ),
        _ => info!("Removed destination of point of interest #{}", poi.id),
    }
    Ok(resolution)
}
