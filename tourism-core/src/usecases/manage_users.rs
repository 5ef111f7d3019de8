use super::prelude::*;

/// The two bounds of a block period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockBound {
    Start,
    End,
}

/// Accepts both plain dates (`YYYY-MM-DD`) and RFC 3339 timestamps.
///
/// A plain date as the start blocks from the beginning of that day,
/// as the end until the end of that day.
pub fn parse_block_bound(s: &str, bound: BlockBound) -> Result<Timestamp> {
    let s = s.trim();
    if let Ok(date) = parse_date(s) {
        return Ok(match bound {
            BlockBound::Start => Timestamp::start_of_day(date),
            BlockBound::End => Timestamp::end_of_day(date),
        });
    }
    Timestamp::parse_rfc3339(s).map_err(|_| Error::InvalidDate)
}

pub fn list_users<R>(repo: &R, actor: Option<&User>) -> Result<Vec<User>>
where
    R: UserRepo,
{
    authorize(actor, Subject::UserAccount, Ownership::Unowned, Action::Read)?;
    Ok(repo.all_users()?)
}

pub fn delete_user<R>(repo: &R, actor: Option<&User>, id: Id) -> Result<()>
where
    R: UserRepo,
{
    let user = repo.get_user(id)?;
    authorize(actor, Subject::UserAccount, Ownership::of_user(&user), Action::Delete)?;
    repo.delete_user(id)?;
    log::info!("Deleted user #{id}");
    Ok(())
}

/// Block a user from posting reviews during the given period.
///
/// Unless both bounds are given the user is unblocked.
pub fn block_user<R>(
    repo: &R,
    actor: Option<&User>,
    id: Id,
    start: Option<Timestamp>,
    end: Option<Timestamp>,
) -> Result<User>
where
    R: UserRepo,
{
    let mut user = repo.get_user(id)?;
    authorize(actor, Subject::UserAccount, Ownership::of_user(&user), Action::Block)?;
    let block = BlockPeriod::try_from_bounds(start, end);
    if block.is_some_and(|b| b.end < b.start) {
        return Err(Error::EndDateBeforeStart);
    }
    user.block = block;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    match block {
        Some(b) => log::info!("Blocked user #{id} from {} until {}", b.start, b.end),
        None => log::info!("Unblocked user #{id}"),
    }
    Ok(user)
}
