pub use tourism_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;
    use usecases::Error as ParameterError;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    fn try_date(date: Option<String>) -> Result<Option<e::Date>, ParameterError> {
        date.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| e::parse_date(s).map_err(|_| ParameterError::InvalidDate))
            .transpose()
    }

    fn try_poi_details(
        kind: e::PoiKind,
        details: PoiDetails,
    ) -> Result<e::PoiDetails, ParameterError> {
        let PoiDetails {
            stars,
            forks,
            category,
            cuisine,
            hours,
            date,
            email,
            period,
            site_type,
            location,
        } = details;
        let details = match kind {
            e::PoiKind::Hotel => e::PoiDetails::Hotel { stars },
            e::PoiKind::Restaurant => e::PoiDetails::Restaurant {
                forks,
                category,
                cuisine,
            },
            e::PoiKind::Museum => e::PoiDetails::Museum { hours },
            e::PoiKind::Activity => e::PoiDetails::Activity { category },
            e::PoiKind::Festival => e::PoiDetails::Festival {
                date: try_date(date)?.ok_or(ParameterError::InvalidDate)?,
            },
            e::PoiKind::GuestHouse => e::PoiDetails::GuestHouse {
                email: email
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<e::EmailAddress>())
                    .transpose()
                    .map_err(|_| ParameterError::Email)?,
            },
            e::PoiKind::ArchaeologicalSite => e::PoiDetails::ArchaeologicalSite {
                period,
                site_type,
                location,
            },
        };
        Ok(details)
    }

    /// The collection determines the kind, fields of
    /// other kinds are ignored.
    pub fn try_poi_properties(
        kind: e::PoiKind,
        poi: NewPoi,
    ) -> Result<e::PoiProperties, ParameterError> {
        let NewPoi {
            name,
            description,
            latitude,
            longitude,
            price,
            image,
            phone,
            website,
            details,
        } = poi;
        Ok(e::PoiProperties {
            name,
            description,
            latitude,
            longitude,
            price,
            image,
            phone,
            website,
            details: try_poi_details(kind, details)?,
        })
    }

    pub fn destination(id: e::Id, from: NewDestination) -> e::Destination {
        let NewDestination {
            name,
            latitude,
            longitude,
        } = from;
        e::Destination {
            id,
            name,
            latitude,
            longitude,
        }
    }

    pub fn try_entity_ref(entity_type: &str, entity_id: i64) -> Option<e::EntityRef> {
        let kind = entity_type.trim().parse::<e::EntityKind>().ok()?;
        Some(e::EntityRef::new(kind, e::Id::new(entity_id)))
    }

    pub fn new_user(from: NewUser) -> Result<usecases::NewUser, ParameterError> {
        let NewUser {
            email,
            password,
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth,
            location,
            profilepic,
        } = from;
        let profile = e::Profile {
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth: try_date(dateofbirth)?,
            location,
            profilepic,
        };
        Ok(usecases::NewUser {
            email,
            password,
            profile,
        })
    }

    pub fn profile_update(from: ProfileUpdate) -> Result<usecases::ProfileUpdate, ParameterError> {
        let ProfileUpdate {
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth,
            location,
            profilepic,
        } = from;
        Ok(usecases::ProfileUpdate {
            username,
            firstname,
            lastname,
            phonenumber,
            gender,
            dateofbirth: try_date(dateofbirth)?,
            location,
            profilepic,
        })
    }

    pub fn preference_params(from: &Preference) -> usecases::PreferenceParams<'_> {
        let Preference {
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
        usecases::PreferenceParams {
            budget: *budget,
            accommodation: (*accommodation).into(),
            stars: *stars,
            forks: *forks,
            departure_date,
            arrival_date,
            departure_city: departure_city.map(e::Id::new),
            arrival_city: arrival_city.map(e::Id::new),
            activity_categories: activity_categories.clone(),
            cuisines: cuisines.clone(),
        }
    }

    pub fn circuit_history_params(from: &NewCircuitHistory) -> usecases::CircuitHistoryParams<'_> {
        usecases::CircuitHistoryParams {
            circuit: e::Id::new(from.circuit),
            departure_date: &from.departure_date,
            arrival_date: &from.arrival_date,
        }
    }

    pub fn review_update(from: ReviewUpdate) -> usecases::ReviewUpdate {
        let ReviewUpdate {
            rating,
            comment,
            image,
        } = from;
        usecases::ReviewUpdate {
            rating,
            comment,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{from_json::*, *};

    fn new_poi(details: PoiDetails) -> NewPoi {
        NewPoi {
            name: "Carthage Festival".into(),
            description: None,
            latitude: None,
            longitude: None,
            price: None,
            image: None,
            phone: None,
            website: None,
            details,
        }
    }

    #[test]
    fn festivals_require_a_date() {
        let err = try_poi_properties(e::PoiKind::Festival, new_poi(PoiDetails::default()))
            .unwrap_err();
        assert!(matches!(err, usecases::Error::InvalidDate));

        let props = try_poi_properties(
            e::PoiKind::Festival,
            new_poi(PoiDetails {
                date: Some("2025-07-12".into()),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(e::PoiKind::Festival, props.kind());
    }

    #[test]
    fn ignore_details_of_other_kinds() {
        let props = try_poi_properties(
            e::PoiKind::Hotel,
            new_poi(PoiDetails {
                stars: Some(5),
                forks: Some(3),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(e::PoiDetails::Hotel { stars: Some(5) }, props.details);
    }

    #[test]
    fn reject_invalid_guest_house_email() {
        let err = try_poi_properties(
            e::PoiKind::GuestHouse,
            new_poi(PoiDetails {
                email: Some("not an email".into()),
                ..Default::default()
            }),
        )
        .unwrap_err();
        assert!(matches!(err, usecases::Error::Email));
    }

    #[test]
    fn parse_entity_refs() {
        let entity_ref = try_entity_ref("archaeological_site", 3).unwrap();
        assert_eq!(e::EntityKind::ArchaeologicalSite, entity_ref.kind);
        assert_eq!(e::Id::new(3), entity_ref.id);
        assert!(try_entity_ref("castle", 3).is_none());
    }
}
