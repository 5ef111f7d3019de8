pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{poi_builder::*, user_builder::*};

pub mod poi_builder {

    use super::*;
    use crate::{id::*, poi::*, time::*};

    #[derive(Debug)]
    pub struct PoiBuild {
        poi: Poi,
    }

    impl PoiBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.poi.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.poi.props.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.poi.props.description = Some(desc.into());
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.poi.props.latitude = Some(lat);
            self.poi.props.longitude = Some(lng);
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.poi.props.price = Some(price);
            self
        }
        pub fn destination(mut self, id: Option<i64>) -> Self {
            self.poi.destination = id.map(Into::into);
            self
        }
        pub fn details(mut self, details: PoiDetails) -> Self {
            self.poi.props.details = details;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.poi.created_at = at;
            self.poi.updated_at = at;
            self
        }
        pub fn finish(self) -> Poi {
            self.poi
        }
    }

    impl Builder for Poi {
        type Build = PoiBuild;
        fn build() -> PoiBuild {
            let now = Timestamp::now();
            PoiBuild {
                poi: Poi {
                    id: Id::new(0),
                    destination: None,
                    created_at: now,
                    updated_at: now,
                    props: PoiProperties {
                        name: "".into(),
                        description: None,
                        latitude: None,
                        longitude: None,
                        price: None,
                        image: None,
                        phone: None,
                        website: None,
                        details: PoiDetails::Hotel { stars: None },
                    },
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn name(mut self, firstname: &str, lastname: &str) -> Self {
            self.user.profile.firstname = firstname.into();
            self.user.profile.lastname = lastname.into();
            self
        }
        pub fn block(mut self, start: Timestamp, end: Timestamp) -> Self {
            self.user.block = Some(BlockPeriod { start, end });
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            UserBuild {
                user: User {
                    id: Id::new(0),
                    email: EmailAddress::new_unchecked("test@example.com".into()),
                    password: Password::from_hash("".into()),
                    role: Role::default(),
                    profile: Profile::default(),
                    block: None,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }

    #[test]
    fn blocked_user() {
        use time::Duration;
        let now = Timestamp::now();
        let user = User::build()
            .block(now - Duration::hours(1), now + Duration::hours(1))
            .finish();
        assert!(user.is_blocked_at(now));
        assert!(!user.is_blocked_at(now + Duration::hours(2)));
        assert!(!User::build().finish().is_blocked_at(now));
    }
}
