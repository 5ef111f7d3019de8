use super::prelude::*;
use crate::util::{text::non_empty, validate::Validate};

fn trimmed(s: Option<String>) -> Option<String> {
    non_empty(s.as_deref()).map(ToOwned::to_owned)
}

fn auto_correct(mut props: PoiProperties) -> PoiProperties {
    props.name = props.name.trim().to_owned();
    props.description = trimmed(props.description);
    props.image = trimmed(props.image);
    props.phone = trimmed(props.phone);
    props.website = trimmed(props.website);
    props
}

pub fn create_poi<R>(repo: &R, actor: Option<&User>, props: PoiProperties) -> Result<Poi>
where
    R: PoiRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Create)?;
    let props = auto_correct(props);
    props.validate()?;
    let kind = props.kind();
    let id = repo.create_poi(&props, Timestamp::now())?;
    log::info!("Created {kind} #{id} '{}'", props.name);
    Ok(repo.get_poi(kind, id)?)
}

/// Replace all editable properties. The kind of a point of interest
/// is immutable and the destination is assigned separately.
pub fn update_poi<R>(repo: &R, actor: Option<&User>, id: Id, props: PoiProperties) -> Result<Poi>
where
    R: PoiRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Update)?;
    let props = auto_correct(props);
    props.validate()?;
    let kind = props.kind();
    // Fails for points of interest of a different kind
    repo.get_poi(kind, id)?;
    repo.update_poi(id, &props, Timestamp::now())?;
    log::info!("Updated {kind} #{id}");
    Ok(repo.get_poi(kind, id)?)
}

pub fn delete_poi<R>(repo: &R, actor: Option<&User>, kind: PoiKind, id: Id) -> Result<()>
where
    R: PoiRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Delete)?;
    repo.delete_poi(kind, id)?;
    log::info!("Deleted {kind} #{id}");
    Ok(())
}

pub fn get_poi<R>(repo: &R, kind: PoiKind, id: Id) -> Result<Poi>
where
    R: PoiRepo,
{
    Ok(repo.get_poi(kind, id)?)
}
