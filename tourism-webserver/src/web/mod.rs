use std::sync::Arc;

use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

use tourism_core::gateways::geocode::ReverseGeoCodingGateway;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// How long an issued bearer token stays valid.
    pub jwt_token_lifetime: Duration,
    /// A random secret is generated on startup if missing,
    /// i.e. all tokens become invalid on restart.
    pub jwt_secret: Option<String>,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            jwt_token_lifetime: Duration::days(1),
            jwt_secret: None,
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    geocoding: Arc<dyn ReverseGeoCodingGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.jwt_secret.clone(), cfg.jwt_token_lifetime);

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(geo_gw)
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Arc<dyn ReverseGeoCodingGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };

    let instance = rocket_instance(options, db, geocoding);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
