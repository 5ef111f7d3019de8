use super::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct CircuitHistoryParams<'a> {
    pub circuit: Id,
    /// `YYYY-MM-DD`
    pub departure_date: &'a str,
    /// `YYYY-MM-DD`
    pub arrival_date: &'a str,
}

// Checked in this order: date format, circuit existence, duration.
fn check_params<R>(repo: &R, params: &CircuitHistoryParams) -> Result<NewCircuitHistory>
where
    R: CircuitRepo,
{
    let departure_date = parse_date(params.departure_date).map_err(|_| Error::InvalidDate)?;
    let arrival_date = parse_date(params.arrival_date).map_err(|_| Error::InvalidDate)?;
    let circuit = repo.get_circuit(params.circuit).map_err(|err| match err {
        RepoError::NotFound => Error::CircuitNotFound,
        err => err.into(),
    })?;
    let duration = circuit.props.duration;
    if days_between(departure_date, arrival_date) != i64::from(duration) {
        return Err(Error::CircuitDuration(duration));
    }
    Ok(NewCircuitHistory {
        circuit: circuit.id,
        departure_date,
        arrival_date,
    })
}

pub fn create_circuit_history<R>(
    repo: &R,
    actor: Option<&User>,
    params: &CircuitHistoryParams,
) -> Result<CircuitHistory>
where
    R: CircuitRepo + CircuitHistoryRepo,
{
    authorize(actor, Subject::CircuitHistory, Ownership::Unowned, Action::Create)?;
    let new_history = check_params(repo, params)?;
    let id = repo.create_circuit_history(&new_history, Timestamp::now())?;
    Ok(repo.get_circuit_history(id)?)
}

pub fn update_circuit_history<R>(
    repo: &R,
    actor: Option<&User>,
    id: Id,
    params: &CircuitHistoryParams,
) -> Result<CircuitHistory>
where
    R: CircuitRepo + CircuitHistoryRepo,
{
    authorize(actor, Subject::CircuitHistory, Ownership::Unowned, Action::Update)?;
    let mut history = repo.get_circuit_history(id)?;
    let NewCircuitHistory {
        circuit,
        departure_date,
        arrival_date,
    } = check_params(repo, params)?;
    history.circuit = circuit;
    history.departure_date = departure_date;
    history.arrival_date = arrival_date;
    history.updated_at = Timestamp::now();
    repo.update_circuit_history(&history)?;
    Ok(history)
}

pub fn delete_circuit_history<R>(repo: &R, actor: Option<&User>, id: Id) -> Result<()>
where
    R: CircuitHistoryRepo,
{
    authorize(actor, Subject::CircuitHistory, Ownership::Unowned, Action::Delete)?;
    Ok(repo.delete_circuit_history(id)?)
}

pub fn get_circuit_history<R>(repo: &R, id: Id) -> Result<CircuitHistory>
where
    R: CircuitHistoryRepo,
{
    Ok(repo.get_circuit_history(id)?)
}

pub fn list_circuit_histories<R>(repo: &R) -> Result<Vec<CircuitHistory>>
where
    R: CircuitHistoryRepo,
{
    Ok(repo.all_circuit_histories()?)
}
