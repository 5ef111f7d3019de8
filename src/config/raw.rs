use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("smart-tourism.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fill in all sections that are missing with
    /// the corresponding sections of `defaults`.
    pub fn or(self, defaults: Self) -> Self {
        let Self {
            db,
            webserver,
            geocoding,
            gateway,
        } = self;
        let gateway = match (gateway, defaults.gateway) {
            (Some(gw), Some(default_gw)) => Some(gw.or(default_gw)),
            (gw, default_gw) => gw.or(default_gw),
        };
        Self {
            db: db.or(defaults.db),
            webserver: webserver.or(defaults.webserver),
            geocoding: geocoding.or(defaults.geocoding),
            gateway,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub jwt_token_lifetime: Option<Duration>,
    pub jwt_secret: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
    Nominatim,
}

impl GeocodingGateway {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opencage => "opencage",
            Self::Nominatim => "nominatim",
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub opencage: Option<OpenCage>,
    pub nominatim: Option<Nominatim>,
}

impl Gateway {
    fn or(self, defaults: Self) -> Self {
        Self {
            opencage: self.opencage.or(defaults.opencage),
            nominatim: self.nominatim.or(defaults.nominatim),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}
