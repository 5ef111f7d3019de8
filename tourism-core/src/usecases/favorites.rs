use super::{prelude::*, resolve_entity_ref};

pub fn add_favorite<R>(repo: &R, actor: Option<&User>, target: EntityRef) -> Result<Favorite>
where
    R: FavoriteRepo,
{
    authorize(actor, Subject::Favorite, ownership_of(actor), Action::Create)?;
    let user = require_user(actor)?;
    if repo.try_get_favorite(user.id, target)?.is_some() {
        return Err(Error::AlreadyFavorite);
    }
    // The unique index catches concurrent requests
    repo.create_favorite(user.id, target, Timestamp::now())
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyFavorite,
            err => err.into(),
        })?;
    repo.try_get_favorite(user.id, target)?
        .ok_or(Error::Repo(RepoError::NotFound))
}

pub fn remove_favorite<R>(repo: &R, actor: Option<&User>, target: EntityRef) -> Result<()>
where
    R: FavoriteRepo,
{
    authorize(actor, Subject::Favorite, ownership_of(actor), Action::Delete)?;
    let user = require_user(actor)?;
    repo.delete_favorite(user.id, target)
        .map_err(|err| match err {
            RepoError::NotFound => Error::NotFavorite,
            err => err.into(),
        })
}

/// The favorites of the acting user together with their (possibly dangling) targets.
pub fn list_favorites<R>(repo: &R, actor: Option<&User>) -> Result<Vec<(Favorite, ResolvedRef)>>
where
    R: FavoriteRepo + PoiRepo + DestinationRepo + CircuitRepo,
{
    authorize(actor, Subject::Favorite, ownership_of(actor), Action::Read)?;
    let user = require_user(actor)?;
    repo.favorites_of_user(user.id)?
        .into_iter()
        .map(|favorite| {
            let target = resolve_entity_ref(repo, favorite.target)?;
            Ok((favorite, target))
        })
        .collect()
}
