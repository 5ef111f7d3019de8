pub mod prelude {

    use std::cell::Cell;

    pub use tourism_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    use tourism_core::gateways::geocode::ReverseGeoCodingGateway;

    /// Answers every request with the same region label.
    pub struct StubGeoCoding {
        label: Option<String>,
        fail: bool,
        requests: Cell<usize>,
    }

    impl StubGeoCoding {
        pub fn with_label(label: &str) -> Self {
            Self {
                label: Some(label.to_owned()),
                fail: false,
                requests: Cell::new(0),
            }
        }

        pub fn unknown() -> Self {
            Self {
                label: None,
                fail: false,
                requests: Cell::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                label: None,
                fail: true,
                requests: Cell::new(0),
            }
        }

        pub fn requests(&self) -> usize {
            self.requests.get()
        }
    }

    impl ReverseGeoCodingGateway for StubGeoCoding {
        fn resolve_region_label(&self, _pos: MapPoint) -> anyhow::Result<Option<String>> {
            self.requests.set(self.requests.get() + 1);
            if self.fail {
                anyhow::bail!("connection timed out");
            }
            Ok(self.label.clone())
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            tourism_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, email: &str, role: Role) -> User {
            let new_user = usecases::NewUser {
                email: email.into(),
                password: "secret".into(),
                profile: Profile {
                    firstname: "Test".into(),
                    lastname: "User".into(),
                    ..Default::default()
                },
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| usecases::create_new_user(conn, new_user, role))
                .unwrap()
        }

        pub fn try_get_user(&self, email: &str) -> Option<User> {
            let email = email.parse::<EmailAddress>().unwrap();
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_email(&email)
                .unwrap()
        }

        pub fn create_destination(&self, name: &str) -> Id {
            let new_destination = NewDestination {
                name: name.into(),
                latitude: 36.8,
                longitude: 10.18,
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| conn.create_destination(&new_destination))
                .unwrap()
        }

        pub fn try_get_poi(&self, kind: PoiKind, id: Id) -> Option<Poi> {
            match self.db_connections.shared().unwrap().get_poi(kind, id) {
                Ok(poi) => Some(poi),
                Err(RepoError::NotFound) => None,
                Err(err) => panic!("{err}"),
            }
        }
    }

    /// A hotel in the medina of Tunis.
    pub fn hotel_props(name: &str) -> PoiProperties {
        PoiProperties {
            name: name.into(),
            description: None,
            latitude: Some(36.798),
            longitude: Some(10.171),
            price: Some(120.0),
            image: None,
            phone: None,
            website: None,
            details: PoiDetails::Hotel { stars: Some(4) },
        }
    }
}
