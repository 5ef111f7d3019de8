use super::*;
use tourism_core::{entities::*, repositories::*};

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn hotel(name: &str, stars: Option<u8>) -> PoiProperties {
    PoiProperties {
        name: name.into(),
        description: Some("Sea view".into()),
        latitude: Some(35.8),
        longitude: Some(10.6),
        price: Some(120.0),
        image: None,
        phone: None,
        website: None,
        details: PoiDetails::Hotel { stars },
    }
}

fn user(email: &str) -> User {
    let now = Timestamp::now();
    User {
        id: Id::new(0),
        email: email.parse().unwrap(),
        password: Password::from_hash("hash".into()),
        role: Role::User,
        profile: Profile {
            firstname: "Test".into(),
            lastname: "User".into(),
            dateofbirth: Some(parse_date("1990-05-17").unwrap()),
            ..Default::default()
        },
        block: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn create_and_load_points_of_interest() {
    let db = setup();
    let now = Timestamp::now();
    let id = db
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.create_poi(&hotel("Dar Said", Some(4)), now))
        .unwrap();
    let festival = PoiProperties {
        details: PoiDetails::Festival {
            date: parse_date("2025-07-10").unwrap(),
        },
        ..hotel("Carthage Festival", None)
    };
    let festival_id = db
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.create_poi(&festival, now))
        .unwrap();

    let ro = db.shared().unwrap();
    let poi = ro.get_poi(PoiKind::Hotel, id).unwrap();
    assert_eq!("Dar Said", poi.props.name);
    assert_eq!(PoiDetails::Hotel { stars: Some(4) }, poi.props.details);
    assert_eq!(now, poi.created_at);
    assert!(poi.destination.is_none());
    assert_eq!(festival, ro.get_poi(PoiKind::Festival, festival_id).unwrap().props);
    assert!(matches!(
        ro.get_poi(PoiKind::Museum, id),
        Err(Error::NotFound)
    ));
    assert_eq!(1, ro.all_pois_of_kind(PoiKind::Hotel).unwrap().len());
    assert_eq!(2, ro.pois_without_destination().unwrap().len());
}

#[test]
fn update_keeps_kind_and_destination() {
    let db = setup();
    let now = Timestamp::now();
    let mut rw = db.exclusive().unwrap();
    let (poi_id, destination_id) = rw
        .transaction(|conn| {
            let destination_id = conn.create_destination(&NewDestination {
                name: "Sousse".into(),
                latitude: 35.8,
                longitude: 10.6,
            })?;
            let poi_id = conn.create_poi(&hotel("Dar Said", None), now)?;
            conn.assign_poi_destination(poi_id, Some(destination_id))?;
            conn.update_poi(poi_id, &hotel("Dar Said Palace", Some(5)), now)?;
            Ok::<_, Error>((poi_id, destination_id))
        })
        .unwrap();
    let museum = PoiProperties {
        details: PoiDetails::Museum { hours: None },
        ..hotel("Bardo", None)
    };
    assert!(matches!(
        rw.transaction(|conn| conn.update_poi(poi_id, &museum, now)),
        Err(tourism_core::usecases::Error::Repo(Error::NotFound))
    ));
    drop(rw);

    let poi = db.shared().unwrap().get_poi(PoiKind::Hotel, poi_id).unwrap();
    assert_eq!("Dar Said Palace", poi.props.name);
    assert_eq!(Some(destination_id), poi.destination);
}

#[test]
fn deleting_a_destination_unassigns_points_of_interest() {
    let db = setup();
    let now = Timestamp::now();
    let poi_id = db
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            let destination_id = conn.create_destination(&NewDestination {
                name: "Tozeur".into(),
                latitude: 33.9,
                longitude: 8.1,
            })?;
            let poi_id = conn.create_poi(&hotel("Oasis", None), now)?;
            conn.assign_poi_destination(poi_id, Some(destination_id))?;
            conn.delete_destination(destination_id)?;
            Ok::<_, Error>(poi_id)
        })
        .unwrap();
    let poi = db.shared().unwrap().get_poi(PoiKind::Hotel, poi_id).unwrap();
    assert!(poi.destination.is_none());
}

#[test]
fn favorites_are_unique() {
    let db = setup();
    let now = Timestamp::now();
    let mut rw = db.exclusive().unwrap();
    let user_id = rw
        .transaction(|conn| conn.create_user(&user("amira@example.tn")))
        .unwrap();
    let target = EntityRef::new(EntityKind::Hotel, Id::new(42));
    rw.transaction(|conn| conn.create_favorite(user_id, target, now))
        .unwrap();
    assert!(matches!(
        rw.transaction(|conn| conn.create_favorite(user_id, target, now)),
        Err(tourism_core::usecases::Error::Repo(Error::AlreadyExists))
    ));
    assert!(rw
        .transaction(|conn| conn.try_get_favorite(user_id, target))
        .unwrap()
        .is_some());
    rw.transaction(|conn| conn.delete_favorite(user_id, target))
        .unwrap();
    assert!(matches!(
        rw.transaction(|conn| conn.delete_favorite(user_id, target)),
        Err(tourism_core::usecases::Error::Repo(Error::NotFound))
    ));
}

#[test]
fn deleting_a_user_deletes_owned_records() {
    let db = setup();
    let now = Timestamp::now();
    let mut rw = db.exclusive().unwrap();
    let target = EntityRef::new(EntityKind::Destination, Id::new(1));
    let user_id = rw
        .transaction(|conn| {
            let user_id = conn.create_user(&user("amira@example.tn"))?;
            conn.create_favorite(user_id, target, now)?;
            conn.record_click(user_id, target, now)?;
            conn.create_review(
                &NewReview {
                    target,
                    author: user_id,
                    rating: RatingValue::from(4),
                    comment: Some("Nice".into()),
                    image: None,
                },
                now,
            )?;
            Ok::<_, Error>(user_id)
        })
        .unwrap();
    rw.transaction(|conn| conn.delete_user(user_id)).unwrap();
    drop(rw);

    let ro = db.shared().unwrap();
    assert!(ro.favorites_of_user(user_id).unwrap().is_empty());
    assert!(ro.clicks_of_user(user_id).unwrap().is_empty());
    assert!(ro.query_reviews(&ReviewQuery::default()).unwrap().is_empty());
}

#[test]
fn users_with_profile_and_block_period() {
    let db = setup();
    let mut rw = db.exclusive().unwrap();
    let mut u = user("Amira@Example.tn");
    u.id = rw.transaction(|conn| conn.create_user(&u)).unwrap();
    assert!(matches!(
        rw.transaction(|conn| conn.create_user(&u)),
        Err(tourism_core::usecases::Error::Repo(Error::AlreadyExists))
    ));
    let start = Timestamp::start_of_day(parse_date("2025-03-01").unwrap());
    let end = Timestamp::end_of_day(parse_date("2025-03-05").unwrap());
    u.block = Some(BlockPeriod { start, end });
    u.role = Role::Admin;
    rw.transaction(|conn| conn.update_user(&u)).unwrap();
    drop(rw);

    let ro = db.shared().unwrap();
    let loaded = ro.get_user_by_email(&u.email).unwrap();
    assert_eq!(u, loaded);
    assert!(loaded.is_blocked_at(start));
    assert!(!loaded.is_blocked_at(end + time::Duration::milliseconds(1)));
}

#[test]
fn reviews_newest_first_filtered_by_target() {
    let db = setup();
    let mut rw = db.exclusive().unwrap();
    let user_id = rw
        .transaction(|conn| conn.create_user(&user("amira@example.tn")))
        .unwrap();
    let hotel_ref = EntityRef::new(EntityKind::Hotel, Id::new(1));
    let museum_ref = EntityRef::new(EntityKind::Museum, Id::new(1));
    let t0 = Timestamp::now();
    for (i, target) in [hotel_ref, museum_ref, hotel_ref].into_iter().enumerate() {
        let review = NewReview {
            target,
            author: user_id,
            rating: RatingValue::from(3),
            comment: None,
            image: None,
        };
        rw.transaction(|conn| {
            conn.create_review(&review, t0 + time::Duration::seconds(i as i64))
        })
        .unwrap();
    }
    drop(rw);

    let ro = db.shared().unwrap();
    let query = ReviewQuery {
        kind: Some(EntityKind::Hotel),
        id: Some(Id::new(1)),
    };
    let reviews = ro.query_reviews(&query).unwrap();
    assert_eq!(2, reviews.len());
    assert!(reviews[0].created_at > reviews[1].created_at);
    assert_eq!(3, ro.query_reviews(&ReviewQuery::default()).unwrap().len());
}

#[test]
fn circuits_with_schedules() {
    let db = setup();
    let now = Timestamp::now();
    let mut rw = db.exclusive().unwrap();
    let (circuit_id, props) = rw
        .transaction(|conn| {
            let tunis = conn.create_destination(&NewDestination {
                name: "Tunis".into(),
                latitude: 36.8,
                longitude: 10.2,
            })?;
            let kairouan = conn.create_destination(&NewDestination {
                name: "Kairouan".into(),
                latitude: 35.7,
                longitude: 10.1,
            })?;
            let props = CircuitProperties {
                name: "Grand Sud".into(),
                circuit_code: "GS-01".into(),
                departure_city: "Tunis".into(),
                arrival_city: "Djerba".into(),
                price: 450.0,
                duration: 3,
                description: None,
                schedules: vec![
                    CircuitSchedule {
                        day: 1,
                        destination: tunis,
                        description: Some("Medina".into()),
                    },
                    CircuitSchedule {
                        day: 2,
                        destination: kairouan,
                        description: None,
                    },
                ],
            };
            let id = conn.create_circuit(&props, now)?;
            Ok::<_, Error>((id, props))
        })
        .unwrap();
    assert!(matches!(
        rw.transaction(|conn| conn.create_circuit(&props, now)),
        Err(tourism_core::usecases::Error::Repo(Error::AlreadyExists))
    ));

    let mut shorter = props.clone();
    shorter.schedules.truncate(1);
    rw.transaction(|conn| conn.update_circuit(circuit_id, &shorter, now))
        .unwrap();
    let history_id = rw
        .transaction(|conn| {
            conn.create_circuit_history(
                &NewCircuitHistory {
                    circuit: circuit_id,
                    departure_date: parse_date("2025-01-01").unwrap(),
                    arrival_date: parse_date("2025-01-04").unwrap(),
                },
                now,
            )
        })
        .unwrap();
    drop(rw);

    let ro = db.shared().unwrap();
    let circuit = ro.get_circuit(circuit_id).unwrap();
    assert_eq!(shorter, circuit.props);
    assert_eq!(3, ro.get_circuit_history(history_id).unwrap().days());
    drop(ro);

    db.exclusive()
        .unwrap()
        .transaction(|conn| conn.delete_circuit(circuit_id))
        .unwrap();
    assert!(matches!(
        db.shared().unwrap().get_circuit_history(history_id),
        Err(Error::NotFound)
    ));
}

#[test]
fn replace_preferences() {
    let db = setup();
    let mut rw = db.exclusive().unwrap();
    let user_id = rw
        .transaction(|conn| conn.create_user(&user("amira@example.tn")))
        .unwrap();
    let mut preference = Preference {
        user: user_id,
        budget: 800.0,
        accommodation: Accommodation::GuestHouse,
        stars: 3,
        forks: 2,
        departure_date: parse_date("2025-06-01").unwrap(),
        arrival_date: parse_date("2025-06-08").unwrap(),
        departure_city: None,
        arrival_city: None,
        activity_categories: vec!["diving".into(), "hiking".into()],
        cuisines: vec!["tunisian".into()],
    };
    rw.transaction(|conn| conn.save_preference(&preference))
        .unwrap();
    preference.activity_categories = vec!["desert".into()];
    preference.cuisines.clear();
    rw.transaction(|conn| conn.save_preference(&preference))
        .unwrap();
    assert_eq!(
        Some(preference),
        rw.transaction(|conn| conn.try_get_preference(user_id))
            .unwrap()
    );
    rw.transaction(|conn| conn.delete_preference(user_id))
        .unwrap();
    assert!(rw
        .transaction(|conn| conn.try_get_preference(user_id))
        .unwrap()
        .is_none());
}

#[test]
fn roll_back_failed_transactions() {
    let db = setup();
    let now = Timestamp::now();
    let res = db.exclusive().unwrap().transaction(|conn| {
        conn.create_poi(&hotel("Ghost", None), now)?;
        Err::<(), _>(Error::NotFound)
    });
    assert!(res.is_err());
    assert!(db
        .shared()
        .unwrap()
        .all_pois_of_kind(PoiKind::Hotel)
        .unwrap()
        .is_empty());
}
