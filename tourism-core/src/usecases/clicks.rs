use super::{prelude::*, resolve_entity_ref};

pub fn record_click<R>(repo: &R, actor: Option<&User>, target: EntityRef) -> Result<ClickHistory>
where
    R: ClickHistoryRepo,
{
    authorize(actor, Subject::ClickHistory, ownership_of(actor), Action::Create)?;
    let user = require_user(actor)?;
    let clicked_at = Timestamp::now();
    let id = repo.record_click(user.id, target, clicked_at)?;
    Ok(ClickHistory {
        id,
        user: user.id,
        target,
        clicked_at,
    })
}

pub fn list_clicks<R>(repo: &R, actor: Option<&User>) -> Result<Vec<(ClickHistory, ResolvedRef)>>
where
    R: ClickHistoryRepo + PoiRepo + DestinationRepo + CircuitRepo,
{
    authorize(actor, Subject::ClickHistory, ownership_of(actor), Action::Read)?;
    let user = require_user(actor)?;
    repo.clicks_of_user(user.id)?
        .into_iter()
        .map(|click| {
            let target = resolve_entity_ref(repo, click.target)?;
            Ok((click, target))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn record_and_list_own_clicks() {
        let db = MockDb::default();
        let alice = db.add_user("alice@example.tn", Role::User);
        let bob = db.add_user("bob@example.tn", Role::User);
        let target = EntityRef::new(EntityKind::Activity, Id::new(3));
        record_click(&db, Some(&alice), target).unwrap();
        record_click(&db, Some(&alice), target).unwrap();
        record_click(&db, Some(&bob), target).unwrap();
        let clicks = list_clicks(&db, Some(&alice)).unwrap();
        assert_eq!(2, clicks.len());
        assert!(clicks.iter().all(|(c, t)| c.user == alice.id && t.is_dangling()));
        assert!(clicks[0].0.id > clicks[1].0.id);
    }
}
