use super::*;

#[get("/reviews?<entity_type>&<entity_id>")]
pub fn get_reviews(
    db: sqlite::Connections,
    entity_type: Option<String>,
    entity_id: Option<i64>,
) -> Result<Vec<json::Review>> {
    let kind = entity_type
        .as_deref()
        .map(|entity_type| entity_ref(entity_type, 0).map(|r| r.kind))
        .transpose()?;
    let query = ReviewQuery {
        kind,
        id: entity_id.map(Id::new),
    };
    let reviews = usecases::list_reviews(&db.shared()?, &query)?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[get("/reviews/<id>")]
pub fn get_review(db: sqlite::Connections, id: i64) -> Result<json::Review> {
    let review = usecases::get_review(&db.shared()?, Id::new(id))?;
    Ok(Json(review.into()))
}

#[post("/reviews", format = "application/json", data = "<review>")]
pub fn post_review(
    db: sqlite::Connections,
    auth: Auth,
    review: JsonResult<'_, json::NewReview>,
) -> CreatedResult<json::Review> {
    let json::NewReview {
        target,
        rating,
        comment,
        image,
    } = review?.into_inner();
    let params = usecases::NewReviewParams {
        target: entity_ref(&target.entity_type, target.entity_id)?,
        rating,
        comment,
        image,
    };
    let actor = auth.actor(&db.shared()?)?;
    let review = db.transaction(|conn| {
        usecases::create_review(conn, actor.as_ref(), params, Timestamp::now())
    })?;
    let review = usecases::get_review(&db.shared()?, review.id)?;
    let location = format!("/reviews/{}", review.0.id);
    Ok(created(location, review.into()))
}

#[put("/reviews/<id>", format = "application/json", data = "<review>")]
pub fn put_review(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    review: JsonResult<'_, json::ReviewUpdate>,
) -> Result<json::Review> {
    let update = from_json::review_update(review?.into_inner());
    let actor = auth.actor(&db.shared()?)?;
    let review =
        db.transaction(|conn| usecases::update_review(conn, actor.as_ref(), Id::new(id), update))?;
    let review = usecases::get_review(&db.shared()?, review.id)?;
    Ok(Json(review.into()))
}

#[delete("/reviews/<id>")]
pub fn delete_review(db: sqlite::Connections, auth: Auth, id: i64) -> StatusResult {
    let actor = auth.actor(&db.shared()?)?;
    db.transaction(|conn| usecases::delete_review(conn, actor.as_ref(), Id::new(id)))?;
    Ok(Status::NoContent)
}
