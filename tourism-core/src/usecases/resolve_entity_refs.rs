use super::prelude::*;

fn found_or_dangling<T>(
    entity_ref: EntityRef,
    res: std::result::Result<T, RepoError>,
    wrap: impl FnOnce(T) -> Entity,
) -> Result<ResolvedRef> {
    match res {
        Ok(entity) => Ok(ResolvedRef::Found(wrap(entity))),
        Err(RepoError::NotFound) => Ok(ResolvedRef::Dangling(entity_ref)),
        Err(err) => Err(err.into()),
    }
}

/// Follow a weak reference to its target.
///
/// A missing target is not an error but a dangling reference.
pub fn resolve_entity_ref<R>(repo: &R, entity_ref: EntityRef) -> Result<ResolvedRef>
where
    R: PoiRepo + DestinationRepo + CircuitRepo,
{
    let EntityRef { kind, id } = entity_ref;
    if let Some(poi_kind) = kind.poi_kind() {
        return found_or_dangling(entity_ref, repo.get_poi(poi_kind, id), Entity::Poi);
    }
    match kind {
        EntityKind::Destination => {
            found_or_dangling(entity_ref, repo.get_destination(id), Entity::Destination)
        }
        EntityKind::Circuit => found_or_dangling(entity_ref, repo.get_circuit(id), Entity::Circuit),
        _ => {
            log::error!("No resolver for entity kind {kind}");
            Ok(ResolvedRef::Dangling(entity_ref))
        }
    }
}

pub fn resolve_entity_refs<R>(repo: &R, entity_refs: &[EntityRef]) -> Result<Vec<ResolvedRef>>
where
    R: PoiRepo + DestinationRepo + CircuitRepo,
{
    entity_refs
        .iter()
        .map(|entity_ref| resolve_entity_ref(repo, *entity_ref))
        .collect()
}
