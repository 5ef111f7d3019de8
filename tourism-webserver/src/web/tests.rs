use std::sync::Arc;

use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use super::{sqlite, Cfg, InstanceOptions};
use crate::core::prelude::*;
use tourism_core::gateways::geocode::ReverseGeoCodingGateway;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, DummyGeoGW, DUMMY_REGION_LABEL};

    pub use crate::core::{db::*, prelude::*, usecases};
}

pub const DUMMY_REGION_LABEL: &str = "Gouvernorat de Tunis";

/// Every position is located in the same region.
pub struct DummyGeoGW;

impl ReverseGeoCodingGateway for DummyGeoGW {
    fn resolve_region_label(&self, _pos: MapPoint) -> anyhow::Result<Option<String>> {
        Ok(Some(DUMMY_REGION_LABEL.to_owned()))
    }
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = tourism_db_sqlite::Connections::init(":memory:", 1).unwrap();
    tourism_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: Cfg::default(),
    };
    let rocket = super::rocket_instance(options, db.clone(), Arc::new(DummyGeoGW));
    (rocket, db)
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let (rocket, db) = rocket_test_instance(mounts);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

#[test]
fn api_is_mounted_below_its_prefix() {
    let (client, _) = setup(super::mounts());
    let res = client.get("/api/hotels").dispatch();
    assert_eq!(res.status(), rocket::http::Status::Ok);
    assert_eq!(res.into_string().unwrap(), "[]");
    let res = client.get("/hotels").dispatch();
    assert_eq!(res.status(), rocket::http::Status::NotFound);
}
