use super::*;

impl PoiRepo for DbConnection<'_> {
    fn create_poi(&self, props: &PoiProperties, created_at: Timestamp) -> Result<Id> {
        create_poi(&mut self.conn.borrow_mut(), props, created_at)
    }
    fn update_poi(&self, id: Id, props: &PoiProperties, updated_at: Timestamp) -> Result<()> {
        update_poi(&mut self.conn.borrow_mut(), id, props, updated_at)
    }
    fn assign_poi_destination(&self, id: Id, destination: Option<Id>) -> Result<()> {
        assign_poi_destination(&mut self.conn.borrow_mut(), id, destination)
    }
    fn get_poi(&self, kind: PoiKind, id: Id) -> Result<Poi> {
        get_poi(&mut self.conn.borrow_mut(), kind, id)
    }
    fn delete_poi(&self, kind: PoiKind, id: Id) -> Result<()> {
        delete_poi(&mut self.conn.borrow_mut(), kind, id)
    }
    fn all_pois_of_kind(&self, kind: PoiKind) -> Result<Vec<Poi>> {
        all_pois_of_kind(&mut self.conn.borrow_mut(), kind)
    }
    fn pois_without_destination(&self) -> Result<Vec<Poi>> {
        pois_without_destination(&mut self.conn.borrow_mut())
    }
}

impl PoiRepo for DbReadOnly<'_> {
    fn create_poi(&self, _props: &PoiProperties, _created_at: Timestamp) -> Result<Id> {
        Err(read_only())
    }
    fn update_poi(&self, _id: Id, _props: &PoiProperties, _updated_at: Timestamp) -> Result<()> {
        Err(read_only())
    }
    fn assign_poi_destination(&self, _id: Id, _destination: Option<Id>) -> Result<()> {
        Err(read_only())
    }
    fn get_poi(&self, kind: PoiKind, id: Id) -> Result<Poi> {
        get_poi(&mut self.conn.borrow_mut(), kind, id)
    }
    fn delete_poi(&self, _kind: PoiKind, _id: Id) -> Result<()> {
        Err(read_only())
    }
    fn all_pois_of_kind(&self, kind: PoiKind) -> Result<Vec<Poi>> {
        all_pois_of_kind(&mut self.conn.borrow_mut(), kind)
    }
    fn pois_without_destination(&self) -> Result<Vec<Poi>> {
        pois_without_destination(&mut self.conn.borrow_mut())
    }
}

fn poi_changeset(props: &PoiProperties, updated_at: Timestamp) -> models::PoiChangeset<'_> {
    let PoiProperties {
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
    let mut changeset = models::PoiChangeset {
        updated_at: updated_at.as_millis(),
        name,
        description: description.as_deref(),
        latitude: *latitude,
        longitude: *longitude,
        price: *price,
        image: image.as_deref(),
        phone: phone.as_deref(),
        website: website.as_deref(),
        stars: None,
        forks: None,
        cuisine: None,
        category: None,
        hours: None,
        festival_date: None,
        email: None,
        period: None,
        site_type: None,
        location: None,
    };
    match details {
        PoiDetails::Hotel { stars } => {
            changeset.stars = stars.map(i16::from);
        }
        PoiDetails::Restaurant {
            forks,
            category,
            cuisine,
        } => {
            changeset.forks = forks.map(i16::from);
            changeset.category = category.as_deref();
            changeset.cuisine = cuisine.as_deref();
        }
        PoiDetails::Museum { hours } => {
            changeset.hours = hours.as_deref();
        }
        PoiDetails::Activity { category } => {
            changeset.category = category.as_deref();
        }
        PoiDetails::Festival { date } => {
            changeset.festival_date = Some(store_date(*date));
        }
        PoiDetails::GuestHouse { email } => {
            changeset.email = email.as_ref().map(EmailAddress::as_str);
        }
        PoiDetails::ArchaeologicalSite {
            period,
            site_type,
            location,
        } => {
            changeset.period = period.as_deref();
            changeset.site_type = site_type.as_deref();
            changeset.location = location.as_deref();
        }
    }
    changeset
}

fn load_poi(entity: models::PoiEntity) -> Result<Poi> {
    let models::PoiEntity {
        id,
        kind,
        created_at,
        updated_at,
        destination_id,
        name,
        description,
        latitude,
        longitude,
        price,
        image,
        phone,
        website,
        stars,
        forks,
        cuisine,
        category,
        hours,
        festival_date,
        email,
        period,
        site_type,
        location,
    } = entity;
    let details = match load_enum::<PoiKind>("kind of point of interest", kind)? {
        PoiKind::Hotel => PoiDetails::Hotel {
            stars: stars.map(|v| load_small("stars", v)).transpose()?,
        },
        PoiKind::Restaurant => PoiDetails::Restaurant {
            forks: forks.map(|v| load_small("forks", v)).transpose()?,
            category,
            cuisine,
        },
        PoiKind::Museum => PoiDetails::Museum { hours },
        PoiKind::Activity => PoiDetails::Activity { category },
        PoiKind::Festival => {
            let date = festival_date
                .as_deref()
                .map(load_date)
                .transpose()?
                .ok_or_else(|| anyhow!("Missing date of festival #{id}"))?;
            PoiDetails::Festival { date }
        }
        PoiKind::GuestHouse => PoiDetails::GuestHouse {
            email: email.map(EmailAddress::new_unchecked),
        },
        PoiKind::ArchaeologicalSite => PoiDetails::ArchaeologicalSite {
            period,
            site_type,
            location,
        },
    };
    Ok(Poi {
        id: id.into(),
        destination: destination_id.map(Into::into),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
        props: PoiProperties {
            name,
            description,
            latitude,
            longitude,
            price,
            image,
            phone,
            website,
            details,
        },
    })
}

fn create_poi(conn: &mut SqliteConnection, props: &PoiProperties, created_at: Timestamp) -> Result<Id> {
    use schema::poi::dsl;
    let new_poi = poi_changeset(props, created_at);
    diesel::insert_into(schema::poi::table)
        .values((
            &new_poi,
            dsl::kind.eq(store_enum(props.kind())),
            dsl::created_at.eq(created_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_poi(
    conn: &mut SqliteConnection,
    id: Id,
    props: &PoiProperties,
    updated_at: Timestamp,
) -> Result<()> {
    use schema::poi::dsl;
    let changeset = poi_changeset(props, updated_at);
    let count = diesel::update(
        dsl::poi
            .filter(dsl::id.eq(id.to_raw()))
            .filter(dsl::kind.eq(store_enum(props.kind()))),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn assign_poi_destination(
    conn: &mut SqliteConnection,
    id: Id,
    destination: Option<Id>,
) -> Result<()> {
    use schema::poi::dsl;
    let count = diesel::update(dsl::poi.filter(dsl::id.eq(id.to_raw())))
        .set(dsl::destination_id.eq(destination.map(Id::to_raw)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_poi(conn: &mut SqliteConnection, kind: PoiKind, id: Id) -> Result<Poi> {
    use schema::poi::dsl;
    let entity = dsl::poi
        .filter(dsl::id.eq(id.to_raw()))
        .filter(dsl::kind.eq(store_enum(kind)))
        .first::<models::PoiEntity>(conn)
        .map_err(from_diesel_err)?;
    load_poi(entity)
}

fn delete_poi(conn: &mut SqliteConnection, kind: PoiKind, id: Id) -> Result<()> {
    use schema::poi::dsl;
    let count = diesel::delete(
        dsl::poi
            .filter(dsl::id.eq(id.to_raw()))
            .filter(dsl::kind.eq(store_enum(kind))),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn all_pois_of_kind(conn: &mut SqliteConnection, kind: PoiKind) -> Result<Vec<Poi>> {
    use schema::poi::dsl;
    dsl::poi
        .filter(dsl::kind.eq(store_enum(kind)))
        .order_by(dsl::id)
        .load::<models::PoiEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_poi)
        .collect()
}

fn pois_without_destination(conn: &mut SqliteConnection) -> Result<Vec<Poi>> {
    use schema::poi::dsl;
    dsl::poi
        .filter(dsl::destination_id.is_null())
        .order_by(dsl::id)
        .load::<models::PoiEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_poi)
        .collect()
}
