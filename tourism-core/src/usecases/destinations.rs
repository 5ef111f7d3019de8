use super::prelude::*;
use crate::util::text::{contains_ignore_case, non_empty};

fn validate(name: &str, latitude: f64, longitude: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if MapPoint::try_from_lat_lng_deg(latitude, longitude).is_none() {
        return Err(Error::InvalidPosition);
    }
    Ok(())
}

pub fn create_destination<R>(
    repo: &R,
    actor: Option<&User>,
    mut new_destination: NewDestination,
) -> Result<Destination>
where
    R: DestinationRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Create)?;
    new_destination.name = new_destination.name.trim().to_owned();
    validate(
        &new_destination.name,
        new_destination.latitude,
        new_destination.longitude,
    )?;
    let id = repo.create_destination(&new_destination)?;
    log::info!("Created destination #{id} '{}'", new_destination.name);
    Ok(repo.get_destination(id)?)
}

pub fn update_destination<R>(
    repo: &R,
    actor: Option<&User>,
    mut destination: Destination,
) -> Result<Destination>
where
    R: DestinationRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Update)?;
    destination.name = destination.name.trim().to_owned();
    validate(&destination.name, destination.latitude, destination.longitude)?;
    repo.update_destination(&destination)?;
    Ok(repo.get_destination(destination.id)?)
}

pub fn delete_destination<R>(repo: &R, actor: Option<&User>, id: Id) -> Result<()>
where
    R: DestinationRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Delete)?;
    repo.delete_destination(id)?;
    log::info!("Deleted destination #{id}");
    Ok(())
}

pub fn get_destination<R>(repo: &R, id: Id) -> Result<Destination>
where
    R: DestinationRepo,
{
    Ok(repo.get_destination(id)?)
}

pub fn search_destinations<R>(repo: &R, search: Option<&str>) -> Result<Vec<Destination>>
where
    R: DestinationRepo,
{
    let destinations = repo.all_destinations()?;
    Ok(match non_empty(search) {
        Some(text) => destinations
            .into_iter()
            .filter(|d| contains_ignore_case(&d.name, text))
            .collect(),
        None => destinations,
    })
}
