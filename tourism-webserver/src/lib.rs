#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

use std::sync::Arc;

use tourism_core::gateways::geocode::ReverseGeoCodingGateway;
use tourism_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    geo_gw: Arc<dyn ReverseGeoCodingGateway + Send + Sync>,
) {
    web::run(connections.into(), enable_cors, cfg, geo_gw).await;
}
