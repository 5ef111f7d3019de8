use super::prelude::*;
use crate::util::{text::non_empty, validate::Validate};

fn prepare<R: DestinationRepo>(repo: &R, mut props: CircuitProperties) -> Result<CircuitProperties> {
    props.name = props.name.trim().to_owned();
    props.circuit_code = props.circuit_code.trim().to_owned();
    props.departure_city = props.departure_city.trim().to_owned();
    props.arrival_city = props.arrival_city.trim().to_owned();
    props.description = non_empty(props.description.as_deref()).map(ToOwned::to_owned);
    // Stable: keeps the given order within a day
    props.schedules.sort_by_key(|s| s.day);
    props.validate()?;
    for schedule in &props.schedules {
        match repo.get_destination(schedule.destination) {
            Ok(_) => {}
            Err(RepoError::NotFound) => return Err(Error::UnknownDestination),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(props)
}

fn map_code_conflict(err: RepoError) -> Error {
    match err {
        RepoError::AlreadyExists => Error::CircuitCodeExists,
        err => err.into(),
    }
}

pub fn create_circuit<R>(repo: &R, actor: Option<&User>, props: CircuitProperties) -> Result<Circuit>
where
    R: CircuitRepo + DestinationRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Create)?;
    let props = prepare(repo, props)?;
    let id = repo
        .create_circuit(&props, Timestamp::now())
        .map_err(map_code_conflict)?;
    log::info!("Created circuit #{id} '{}'", props.circuit_code);
    Ok(repo.get_circuit(id)?)
}

pub fn update_circuit<R>(
    repo: &R,
    actor: Option<&User>,
    id: Id,
    props: CircuitProperties,
) -> Result<Circuit>
where
    R: CircuitRepo + DestinationRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Update)?;
    let props = prepare(repo, props)?;
    repo.update_circuit(id, &props, Timestamp::now())
        .map_err(map_code_conflict)?;
    Ok(repo.get_circuit(id)?)
}

pub fn delete_circuit<R>(repo: &R, actor: Option<&User>, id: Id) -> Result<()>
where
    R: CircuitRepo,
{
    authorize(actor, Subject::Catalog, Ownership::Unowned, Action::Delete)?;
    repo.delete_circuit(id)?;
    log::info!("Deleted circuit #{id}");
    Ok(())
}

pub fn get_circuit<R>(repo: &R, id: Id) -> Result<Circuit>
where
    R: CircuitRepo,
{
    Ok(repo.get_circuit(id)?)
}

pub fn list_circuits<R>(repo: &R) -> Result<Vec<Circuit>>
where
    R: CircuitRepo,
{
    Ok(repo.all_circuits()?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn create_circuit_with_ordered_schedules() {
        let db = MockDb::default();
        let admin = db.add_user("admin@example.tn", Role::Admin);
        let tunis = db.add_destination("Tunis");
        let tozeur = db.add_destination("Tozeur");
        let mut props = MockDb::circuit_props("SUD-01", 3);
        props.schedules = vec![
            CircuitSchedule {
                day: 3,
                destination: tozeur,
                description: None,
            },
            CircuitSchedule {
                day: 1,
                destination: tunis,
                description: Some("Medina".into()),
            },
        ];
        let circuit = create_circuit(&db, Some(&admin), props).unwrap();
        let days: Vec<_> = circuit.props.schedules.iter().map(|s| s.day).collect();
        assert_eq!(vec![1, 3], days);
    }

    #[test]
    fn reject_unknown_destinations() {
        let db = MockDb::default();
        let admin = db.add_user("admin@example.tn", Role::Admin);
        let mut props = MockDb::circuit_props("SUD-01", 3);
        props.schedules = vec![CircuitSchedule {
            day: 1,
            destination: Id::new(77),
            description: None,
        }];
        assert!(matches!(
            create_circuit(&db, Some(&admin), props),
            Err(Error::UnknownDestination)
        ));
    }

    #[test]
    fn circuit_codes_are_unique() {
        let db = MockDb::default();
        let admin = db.add_user("admin@example.tn", Role::Admin);
        create_circuit(&db, Some(&admin), MockDb::circuit_props("C1", 2)).unwrap();
        assert!(matches!(
            create_circuit(&db, Some(&admin), MockDb::circuit_props("C1", 4)),
            Err(Error::CircuitCodeExists)
        ));
    }

    #[test]
    fn departure_and_arrival_must_differ() {
        let db = MockDb::default();
        let admin = db.add_user("admin@example.tn", Role::Admin);
        let mut props = MockDb::circuit_props("C1", 2);
        props.arrival_city = "tunis".into();
        props.departure_city = "Tunis".into();
        assert!(matches!(
            create_circuit(&db, Some(&admin), props),
            Err(Error::Circuit(_))
        ));
    }
}
