use super::*;
use tourism_entities as e;

impl From<e::poi::PoiKind> for PoiKind {
    fn from(from: e::poi::PoiKind) -> Self {
        use e::poi::PoiKind as K;
        match from {
            K::Hotel => Self::Hotel,
            K::Restaurant => Self::Restaurant,
            K::Museum => Self::Museum,
            K::Activity => Self::Activity,
            K::Festival => Self::Festival,
            K::GuestHouse => Self::GuestHouse,
            K::ArchaeologicalSite => Self::ArchaeologicalSite,
        }
    }
}

impl From<PoiKind> for e::poi::PoiKind {
    fn from(from: PoiKind) -> Self {
        match from {
            PoiKind::Hotel => Self::Hotel,
            PoiKind::Restaurant => Self::Restaurant,
            PoiKind::Museum => Self::Museum,
            PoiKind::Activity => Self::Activity,
            PoiKind::Festival => Self::Festival,
            PoiKind::GuestHouse => Self::GuestHouse,
            PoiKind::ArchaeologicalSite => Self::ArchaeologicalSite,
        }
    }
}

impl From<e::poi::PoiDetails> for PoiDetails {
    fn from(from: e::poi::PoiDetails) -> Self {
        use e::poi::PoiDetails as D;
        match from {
            D::Hotel { stars } => Self {
                stars,
                ..Default::default()
            },
            D::Restaurant {
                forks,
                category,
                cuisine,
            } => Self {
                forks,
                category,
                cuisine,
                ..Default::default()
            },
            D::Museum { hours } => Self {
                hours,
                ..Default::default()
            },
            D::Activity { category } => Self {
                category,
                ..Default::default()
            },
            D::Festival { date } => Self {
                date: Some(e::time::format_date(date)),
                ..Default::default()
            },
            D::GuestHouse { email } => Self {
                email: email.map(|email| email.to_string()),
                ..Default::default()
            },
            D::ArchaeologicalSite {
                period,
                site_type,
                location,
            } => Self {
                period,
                site_type,
                location,
                ..Default::default()
            },
        }
    }
}

impl From<e::poi::Poi> for Poi {
    fn from(from: e::poi::Poi) -> Self {
        let kind = from.kind().into();
        let e::poi::Poi {
            id,
            destination,
            created_at,
            updated_at,
            props,
        } = from;
        let e::poi::PoiProperties {
            name,
            description,
            latitude,
            longitude,
            price,
            image,
            phone,
            website,
            details,
        } = props;
        Self {
            id: id.into(),
            kind,
            name,
            description,
            latitude,
            longitude,
            price,
            image,
            phone,
            website,
            destination: destination.map(Into::into),
            details: details.into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<e::destination::Destination> for Destination {
    fn from(from: e::destination::Destination) -> Self {
        let e::destination::Destination {
            id,
            name,
            latitude,
            longitude,
        } = from;
        Self {
            id: id.into(),
            name,
            latitude,
            longitude,
        }
    }
}

impl From<NewDestination> for e::destination::NewDestination {
    fn from(from: NewDestination) -> Self {
        let NewDestination {
            name,
            latitude,
            longitude,
        } = from;
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

impl From<e::circuit::CircuitSchedule> for CircuitSchedule {
    fn from(from: e::circuit::CircuitSchedule) -> Self {
        let e::circuit::CircuitSchedule {
            day,
            destination,
            description,
        } = from;
        Self {
            day,
            destination: destination.into(),
            description,
        }
    }
}

impl From<CircuitSchedule> for e::circuit::CircuitSchedule {
    fn from(from: CircuitSchedule) -> Self {
        let CircuitSchedule {
            day,
            destination,
            description,
        } = from;
        Self {
            day,
            destination: destination.into(),
            description,
        }
    }
}

impl From<e::circuit::Circuit> for Circuit {
    fn from(from: e::circuit::Circuit) -> Self {
        let e::circuit::Circuit {
            id,
            created_at,
            updated_at,
            props,
        } = from;
        let e::circuit::CircuitProperties {
            name,
            circuit_code,
            departure_city,
            arrival_city,
            price,
            duration,
            description,
            schedules,
        } = props;
        Self {
            id: id.into(),
            name,
            circuit_code,
            departure_city,
            arrival_city,
            price,
            duration,
            description,
            schedules: schedules.into_iter().map(Into::into).collect(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<NewCircuit> for e::circuit::CircuitProperties {
    fn from(from: NewCircuit) -> Self {
        let NewCircuit {
            name,
            circuit_code,
            departure_city,
            arrival_city,
            price,
            duration,
            description,
            schedules,
        } = from;
        Self {
            name,
            circuit_code,
            departure_city,
            arrival_city,
            price,
            duration,
            description,
            schedules: schedules.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::circuit::CircuitHistory> for CircuitHistory {
    fn from(from: e::circuit::CircuitHistory) -> Self {
        let e::circuit::CircuitHistory {
            id,
            circuit,
            departure_date,
            arrival_date,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            circuit: circuit.into(),
            departure_date: e::time::format_date(departure_date),
            arrival_date: e::time::format_date(arrival_date),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<e::entity::EntityRef> for EntityRef {
    fn from(from: e::entity::EntityRef) -> Self {
        Self {
            entity_type: from.kind.to_string(),
            entity_id: from.id.into(),
        }
    }
}

impl From<e::entity::ResolvedRef> for EntityTarget {
    fn from(from: e::entity::ResolvedRef) -> Self {
        let EntityRef {
            entity_type,
            entity_id,
        } = from.entity_ref().into();
        Self {
            entity_type,
            entity_id,
            entity_name: from.entity().map(|entity| entity.name().to_owned()),
            dangling: from.is_dangling(),
        }
    }
}

impl From<(e::review::Review, e::entity::ResolvedRef)> for Review {
    fn from((review, target): (e::review::Review, e::entity::ResolvedRef)) -> Self {
        let e::review::Review {
            id,
            target: _,
            author,
            rating,
            comment,
            image,
            created_at,
            updated_at,
        } = review;
        Self {
            id: id.into(),
            target: target.into(),
            user: author.into(),
            rating: rating.into(),
            comment,
            image,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<(e::favorite::Favorite, e::entity::ResolvedRef)> for Favorite {
    fn from((favorite, target): (e::favorite::Favorite, e::entity::ResolvedRef)) -> Self {
        Self {
            id: favorite.id.into(),
            target: target.into(),
            created_at: favorite.created_at.into(),
        }
    }
}

impl From<(e::click::ClickHistory, e::entity::ResolvedRef)> for Click {
    fn from((click, target): (e::click::ClickHistory, e::entity::ResolvedRef)) -> Self {
        Self {
            id: click.id.into(),
            target: target.into(),
            clicked_at: click.clicked_at.into(),
        }
    }
}

impl From<e::preference::Accommodation> for Accommodation {
    fn from(from: e::preference::Accommodation) -> Self {
        match from {
            e::preference::Accommodation::Hotel => Self::Hotel,
            e::preference::Accommodation::GuestHouse => Self::GuestHouse,
        }
    }
}

impl From<Accommodation> for e::preference::Accommodation {
    fn from(from: Accommodation) -> Self {
        match from {
            Accommodation::Hotel => Self::Hotel,
            Accommodation::GuestHouse => Self::GuestHouse,
        }
    }
}

impl From<e::preference::Preference> for Preference {
    fn from(from: e::preference::Preference) -> Self {
        let e::preference::Preference {
            user: _,
            budget,
            accommodation,
            stars,
            forks,
            departure_date,
            arrival_date,
            departure_city,
            arrival_city,
            activity_categories,
            cuisines,
        } = from;
        Self {
            budget,
            accommodation: accommodation.into(),
            stars,
            forks,
            departure_date: e::time::format_date(departure_date),
            arrival_date: e::time::format_date(arrival_date),
            departure_city: departure_city.map(Into::into),
            arrival_city: arrival_city.map(Into::into),
            activity_categories,
            cuisines,
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        match from {
            e::user::Role::User => Self::User,
            e::user::Role::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let is_blocked = from.is_blocked_at(e::time::Timestamp::now());
        let e::user::User {
            id,
            email,
            password: _password,
            role,
            profile,
            block,
            created_at,
            updated_at: _,
        } = from;
        let e::user::Profile {
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth,
            location,
            profilepic,
        } = profile;
        Self {
            id: id.into(),
            email: email.to_string(),
            role: role.into(),
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth: dateofbirth.map(e::time::format_date),
            location,
            profilepic,
            blockstartdate: block.map(|b| b.start.into()),
            blockenddate: block.map(|b| b.end.into()),
            is_blocked,
            created_at: created_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> e::poi::Poi {
        let now = e::time::Timestamp::from_millis(1_736_942_400_000);
        e::poi::Poi {
            id: e::id::Id::new(7),
            destination: Some(e::id::Id::new(3)),
            created_at: now,
            updated_at: now,
            props: e::poi::PoiProperties {
                name: "Dar El Medina".into(),
                description: None,
                latitude: Some(36.798),
                longitude: Some(10.171),
                price: Some(120.0),
                image: None,
                phone: None,
                website: None,
                details: e::poi::PoiDetails::Hotel { stars: Some(4) },
            },
        }
    }

    #[test]
    fn serialize_only_the_fields_of_the_kind() {
        let json = serde_json::to_value(Poi::from(hotel())).unwrap();
        assert_eq!(json["kind"], "hotel");
        assert_eq!(json["stars"], 4);
        assert_eq!(json["destination"], 3);
        assert_eq!(json["created_at"], "2025-01-15T12:00:00Z");
        assert!(json.get("forks").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn flag_dangling_targets() {
        let entity_ref = e::entity::EntityRef::new(e::entity::EntityKind::GuestHouse, e::id::Id::new(42));
        let target = EntityTarget::from(e::entity::ResolvedRef::Dangling(entity_ref));
        assert_eq!("guest_house", target.entity_type);
        assert_eq!(42, target.entity_id);
        assert!(target.dangling);
        assert!(target.entity_name.is_none());

        let found = EntityTarget::from(e::entity::ResolvedRef::Found(e::entity::Entity::Poi(
            hotel(),
        )));
        assert_eq!("hotel", found.entity_type);
        assert_eq!(Some("Dar El Medina"), found.entity_name.as_deref());
        assert!(!found.dangling);
    }

    #[test]
    fn deserialize_new_review_with_flat_target() {
        let review: NewReview = serde_json::from_str(
            r#"{"entity_type":"restaurant","entity_id":5,"rating":4,"comment":"Delicious"}"#,
        )
        .unwrap();
        assert_eq!("restaurant", review.target.entity_type);
        assert_eq!(5, review.target.entity_id);
        assert_eq!(4, review.rating);
        assert!(review.image.is_none());
    }
}
