use super::prelude::*;
use crate::gateways::geocode::ReverseGeoCodingGateway;

use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> Id;
}

impl Key for Destination {
    fn key(&self) -> Id {
        self.id
    }
}

impl Key for Poi {
    fn key(&self) -> Id {
        self.id
    }
}

impl Key for User {
    fn key(&self) -> Id {
        self.id
    }
}

impl Key for Review {
    fn key(&self) -> Id {
        self.id
    }
}

impl Key for Circuit {
    fn key(&self) -> Id {
        self.id
    }
}

impl Key for CircuitHistory {
    fn key(&self) -> Id {
        self.id
    }
}

fn get<T: Clone + Key>(objects: &[T], id: Id) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    let pos = objects
        .iter()
        .position(|x| x.key() == e.key())
        .ok_or(RepoError::NotFound)?;
    objects[pos] = e.clone();
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: Id) -> RepoResult<()> {
    let pos = objects
        .iter()
        .position(|x| x.key() == id)
        .ok_or(RepoError::NotFound)?;
    objects.remove(pos);
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub destinations: RefCell<Vec<Destination>>,
    pub pois: RefCell<Vec<Poi>>,
    pub users: RefCell<Vec<User>>,
    pub reviews: RefCell<Vec<Review>>,
    pub favorites: RefCell<Vec<Favorite>>,
    pub clicks: RefCell<Vec<ClickHistory>>,
    pub circuits: RefCell<Vec<Circuit>>,
    pub circuit_histories: RefCell<Vec<CircuitHistory>>,
    pub preferences: RefCell<Vec<Preference>>,
    last_id: Cell<i64>,
}

impl MockDb {
    pub const PASSWORD: &'static str = "secret";

    fn next_id(&self) -> Id {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        Id::new(id)
    }

    pub fn hotel_props(name: &str) -> PoiProperties {
        PoiProperties {
            name: name.into(),
            description: None,
            latitude: None,
            longitude: None,
            price: None,
            image: None,
            phone: None,
            website: None,
            details: PoiDetails::Hotel { stars: None },
        }
    }

    pub fn circuit_props(code: &str, duration: u16) -> CircuitProperties {
        CircuitProperties {
            name: format!("Circuit {code}"),
            circuit_code: code.into(),
            departure_city: "Tunis".into(),
            arrival_city: "Djerba".into(),
            price: 300.0,
            duration,
            description: None,
            schedules: vec![],
        }
    }

    pub fn add_user(&self, email: &str, role: Role) -> User {
        let now = Timestamp::now();
        let mut user = User {
            id: Id::new(0),
            email: email.parse().unwrap(),
            password: Self::PASSWORD.parse().unwrap(),
            role,
            profile: Profile {
                firstname: "Test".into(),
                lastname: "User".into(),
                ..Default::default()
            },
            block: None,
            created_at: now,
            updated_at: now,
        };
        user.id = self.create_user(&user).unwrap();
        user
    }

    pub fn add_destination(&self, name: &str) -> Id {
        self.create_destination(&NewDestination {
            name: name.into(),
            latitude: 36.0,
            longitude: 10.0,
        })
        .unwrap()
    }
}

impl DestinationRepo for MockDb {
    fn create_destination(&self, d: &NewDestination) -> RepoResult<Id> {
        let id = self.next_id();
        self.destinations.borrow_mut().push(Destination {
            id,
            name: d.name.clone(),
            latitude: d.latitude,
            longitude: d.longitude,
        });
        Ok(id)
    }
    fn update_destination(&self, d: &Destination) -> RepoResult<()> {
        update(&mut self.destinations.borrow_mut(), d)
    }
    fn delete_destination(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.destinations.borrow_mut(), id)?;
        for poi in self.pois.borrow_mut().iter_mut() {
            if poi.destination == Some(id) {
                poi.destination = None;
            }
        }
        Ok(())
    }
    fn get_destination(&self, id: Id) -> RepoResult<Destination> {
        get(&self.destinations.borrow(), id)
    }
    fn all_destinations(&self) -> RepoResult<Vec<Destination>> {
        let mut all = self.destinations.borrow().clone();
        all.sort_by_key(|d| d.id);
        Ok(all)
    }
}

impl PoiRepo for MockDb {
    fn create_poi(&self, props: &PoiProperties, created_at: Timestamp) -> RepoResult<Id> {
        let id = self.next_id();
        self.pois.borrow_mut().push(Poi {
            id,
            destination: None,
            created_at,
            updated_at: created_at,
            props: props.clone(),
        });
        Ok(id)
    }
    fn update_poi(&self, id: Id, props: &PoiProperties, updated_at: Timestamp) -> RepoResult<()> {
        let mut pois = self.pois.borrow_mut();
        let poi = pois
            .iter_mut()
            .find(|p| p.id == id && p.kind() == props.kind())
            .ok_or(RepoError::NotFound)?;
        poi.props = props.clone();
        poi.updated_at = updated_at;
        Ok(())
    }
    fn assign_poi_destination(&self, id: Id, destination: Option<Id>) -> RepoResult<()> {
        let mut pois = self.pois.borrow_mut();
        let poi = pois
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        poi.destination = destination;
        Ok(())
    }
    fn get_poi(&self, kind: PoiKind, id: Id) -> RepoResult<Poi> {
        get(&self.pois.borrow(), id).and_then(|poi| {
            if poi.kind() == kind {
                Ok(poi)
            } else {
                Err(RepoError::NotFound)
            }
        })
    }
    fn delete_poi(&self, kind: PoiKind, id: Id) -> RepoResult<()> {
        self.get_poi(kind, id)?;
        delete(&mut self.pois.borrow_mut(), id)
    }
    fn all_pois_of_kind(&self, kind: PoiKind) -> RepoResult<Vec<Poi>> {
        Ok(self
            .pois
            .borrow()
            .iter()
            .filter(|p| p.kind() == kind)
            .cloned()
            .collect())
    }
    fn pois_without_destination(&self) -> RepoResult<Vec<Poi>> {
        Ok(self
            .pois
            .borrow()
            .iter()
            .filter(|p| p.destination.is_none())
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<Id> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        let mut user = user.clone();
        user.id = id;
        self.users.borrow_mut().push(user);
        Ok(id)
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn delete_user(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)?;
        self.reviews.borrow_mut().retain(|r| r.author != id);
        self.favorites.borrow_mut().retain(|f| f.user != id);
        self.clicks.borrow_mut().retain(|c| c.user != id);
        self.preferences.borrow_mut().retain(|p| p.user != id);
        Ok(())
    }
    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, r: &NewReview, created_at: Timestamp) -> RepoResult<Id> {
        let id = self.next_id();
        self.reviews.borrow_mut().push(Review {
            id,
            target: r.target,
            author: r.author,
            rating: r.rating,
            comment: r.comment.clone(),
            image: r.image.clone(),
            created_at,
            updated_at: created_at,
        });
        Ok(id)
    }
    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update(&mut self.reviews.borrow_mut(), review)
    }
    fn delete_review(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.reviews.borrow_mut(), id)
    }
    fn get_review(&self, id: Id) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }
    fn query_reviews(&self, query: &ReviewQuery) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| query.kind.map_or(true, |k| r.target.kind == k))
            .filter(|r| query.id.map_or(true, |id| r.target.id == id))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(reviews)
    }
}

impl FavoriteRepo for MockDb {
    fn create_favorite(&self, user: Id, target: EntityRef, created_at: Timestamp) -> RepoResult<Id> {
        if self.try_get_favorite(user, target)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.favorites.borrow_mut().push(Favorite {
            id,
            user,
            target,
            created_at,
        });
        Ok(id)
    }
    fn delete_favorite(&self, user: Id, target: EntityRef) -> RepoResult<()> {
        let mut favorites = self.favorites.borrow_mut();
        let pos = favorites
            .iter()
            .position(|f| f.user == user && f.target == target)
            .ok_or(RepoError::NotFound)?;
        favorites.remove(pos);
        Ok(())
    }
    fn try_get_favorite(&self, user: Id, target: EntityRef) -> RepoResult<Option<Favorite>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .find(|f| f.user == user && f.target == target)
            .cloned())
    }
    fn favorites_of_user(&self, user: Id) -> RepoResult<Vec<Favorite>> {
        let mut favorites: Vec<_> = self
            .favorites
            .borrow()
            .iter()
            .filter(|f| f.user == user)
            .cloned()
            .collect();
        favorites.reverse();
        Ok(favorites)
    }
}

impl ClickHistoryRepo for MockDb {
    fn record_click(&self, user: Id, target: EntityRef, clicked_at: Timestamp) -> RepoResult<Id> {
        let id = self.next_id();
        self.clicks.borrow_mut().push(ClickHistory {
            id,
            user,
            target,
            clicked_at,
        });
        Ok(id)
    }
    fn clicks_of_user(&self, user: Id) -> RepoResult<Vec<ClickHistory>> {
        let mut clicks: Vec<_> = self
            .clicks
            .borrow()
            .iter()
            .filter(|c| c.user == user)
            .cloned()
            .collect();
        clicks.reverse();
        Ok(clicks)
    }
}

impl CircuitRepo for MockDb {
    fn create_circuit(&self, props: &CircuitProperties, created_at: Timestamp) -> RepoResult<Id> {
        if self
            .circuits
            .borrow()
            .iter()
            .any(|c| c.props.circuit_code == props.circuit_code)
        {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.circuits.borrow_mut().push(Circuit {
            id,
            created_at,
            updated_at: created_at,
            props: props.clone(),
        });
        Ok(id)
    }
    fn update_circuit(&self, id: Id, props: &CircuitProperties, updated_at: Timestamp) -> RepoResult<()> {
        if self
            .circuits
            .borrow()
            .iter()
            .any(|c| c.id != id && c.props.circuit_code == props.circuit_code)
        {
            return Err(RepoError::AlreadyExists);
        }
        let mut circuit = get(&self.circuits.borrow(), id)?;
        circuit.props = props.clone();
        circuit.updated_at = updated_at;
        update(&mut self.circuits.borrow_mut(), &circuit)
    }
    fn delete_circuit(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.circuits.borrow_mut(), id)?;
        self.circuit_histories
            .borrow_mut()
            .retain(|h| h.circuit != id);
        Ok(())
    }
    fn get_circuit(&self, id: Id) -> RepoResult<Circuit> {
        get(&self.circuits.borrow(), id)
    }
    fn all_circuits(&self) -> RepoResult<Vec<Circuit>> {
        Ok(self.circuits.borrow().clone())
    }
}

impl CircuitHistoryRepo for MockDb {
    fn create_circuit_history(
        &self,
        h: &NewCircuitHistory,
        created_at: Timestamp,
    ) -> RepoResult<Id> {
        let id = self.next_id();
        self.circuit_histories.borrow_mut().push(CircuitHistory {
            id,
            circuit: h.circuit,
            departure_date: h.departure_date,
            arrival_date: h.arrival_date,
            created_at,
            updated_at: created_at,
        });
        Ok(id)
    }
    fn update_circuit_history(&self, h: &CircuitHistory) -> RepoResult<()> {
        update(&mut self.circuit_histories.borrow_mut(), h)
    }
    fn delete_circuit_history(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.circuit_histories.borrow_mut(), id)
    }
    fn get_circuit_history(&self, id: Id) -> RepoResult<CircuitHistory> {
        get(&self.circuit_histories.borrow(), id)
    }
    fn all_circuit_histories(&self) -> RepoResult<Vec<CircuitHistory>> {
        Ok(self.circuit_histories.borrow().clone())
    }
}

impl PreferenceRepo for MockDb {
    fn try_get_preference(&self, user: Id) -> RepoResult<Option<Preference>> {
        Ok(self
            .preferences
            .borrow()
            .iter()
            .find(|p| p.user == user)
            .cloned())
    }
    fn save_preference(&self, preference: &Preference) -> RepoResult<()> {
        let mut preferences = self.preferences.borrow_mut();
        preferences.retain(|p| p.user != preference.user);
        preferences.push(preference.clone());
        Ok(())
    }
    fn delete_preference(&self, user: Id) -> RepoResult<()> {
        let mut preferences = self.preferences.borrow_mut();
        let pos = preferences
            .iter()
            .position(|p| p.user == user)
            .ok_or(RepoError::NotFound)?;
        preferences.remove(pos);
        Ok(())
    }
}

/// Answers every request with the same result.
pub struct MockGeoCoding {
    label: Option<String>,
    fail: bool,
    requests: Cell<usize>,
}

impl MockGeoCoding {
    pub fn with_label(label: &str) -> Self {
        Self {
            label: Some(label.into()),
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

impl ReverseGeoCodingGateway for MockGeoCoding {
    fn resolve_region_label(&self, _: MapPoint) -> anyhow::Result<Option<String>> {
        self.requests.set(self.requests.get() + 1);
        if self.fail {
            anyhow::bail!("network unreachable");
        }
        Ok(self.label.clone())
    }
}
