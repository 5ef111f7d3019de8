use super::{prelude::*, resolve_entity_ref};
use crate::util::text::non_empty;

#[derive(Debug, Clone)]
pub struct NewReviewParams {
    pub target: EntityRef,
    pub rating: u8,
    pub comment: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub comment: Option<String>,
    pub image: Option<String>,
}

fn rating_value(rating: u8) -> Result<RatingValue> {
    let value = RatingValue::from(rating);
    if !value.is_valid() {
        return Err(Error::RatingValue);
    }
    Ok(value)
}

fn trimmed(s: Option<String>) -> Option<String> {
    non_empty(s.as_deref()).map(ToOwned::to_owned)
}

// The author might have been deleted in the meantime
fn ownership_of_review<R: UserRepo>(repo: &R, review: &Review) -> Result<Ownership> {
    match repo.get_user(review.author) {
        Ok(author) => Ok(Ownership::of_user(&author)),
        Err(RepoError::NotFound) => Ok(Ownership::OwnedBy {
            owner: review.author,
            role: Role::User,
        }),
        Err(err) => Err(err.into()),
    }
}

/// Post a new review.
///
/// Users are not allowed to post reviews while they are blocked.
pub fn create_review<R>(
    repo: &R,
    actor: Option<&User>,
    params: NewReviewParams,
    now: Timestamp,
) -> Result<Review>
where
    R: ReviewRepo,
{
    authorize(actor, Subject::Review, Ownership::Unowned, Action::Create)?;
    let author = require_user(actor)?;
    if author.is_blocked_at(now) {
        log::info!("Rejecting review of blocked user #{}", author.id);
        return Err(Error::Blocked);
    }
    let NewReviewParams {
        target,
        rating,
        comment,
        image,
    } = params;
    let review = NewReview {
        target,
        author: author.id,
        rating: rating_value(rating)?,
        comment: trimmed(comment),
        image: trimmed(image),
    };
    let id = repo.create_review(&review, now)?;
    log::debug!("User #{} reviewed {target}", author.id);
    Ok(repo.get_review(id)?)
}

pub fn update_review<R>(repo: &R, actor: Option<&User>, id: Id, update: ReviewUpdate) -> Result<Review>
where
    R: ReviewRepo + UserRepo,
{
    let mut review = repo.get_review(id)?;
    authorize(
        actor,
        Subject::Review,
        ownership_of_review(repo, &review)?,
        Action::Update,
    )?;
    review.rating = rating_value(update.rating)?;
    review.comment = trimmed(update.comment);
    review.image = trimmed(update.image);
    review.updated_at = Timestamp::now();
    repo.update_review(&review)?;
    Ok(review)
}

pub fn delete_review<R>(repo: &R, actor: Option<&User>, id: Id) -> Result<()>
where
    R: ReviewRepo + UserRepo,
{
    let review = repo.get_review(id)?;
    authorize(
        actor,
        Subject::Review,
        ownership_of_review(repo, &review)?,
        Action::Delete,
    )?;
    repo.delete_review(id)?;
    log::info!("Deleted review #{id}");
    Ok(())
}

pub fn get_review<R>(repo: &R, id: Id) -> Result<(Review, ResolvedRef)>
where
    R: ReviewRepo + PoiRepo + DestinationRepo + CircuitRepo,
{
    let review = repo.get_review(id)?;
    let target = resolve_entity_ref(repo, review.target)?;
    Ok((review, target))
}

/// All matching reviews together with their (possibly dangling) targets.
pub fn list_reviews<R>(repo: &R, query: &ReviewQuery) -> Result<Vec<(Review, ResolvedRef)>>
where
    R: ReviewRepo + PoiRepo + DestinationRepo + CircuitRepo,
{
    repo.query_reviews(query)?
        .into_iter()
        .map(|review| {
            let target = resolve_entity_ref(repo, review.target)?;
            Ok((review, target))
        })
        .collect()
}
