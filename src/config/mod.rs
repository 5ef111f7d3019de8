use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "smart-tourism.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_JWT_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });
        let defaults = raw::Config::try_default()?;
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)?.or(defaults),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    defaults
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub jwt_token_lifetime: Duration,
    /// A random secret is used if not set
    pub jwt_secret: Option<String>,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    OpenCage { api_key: String },
    Nominatim { base_url: String, timeout: Duration },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            geocoding,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be at least 1"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            jwt_token_lifetime,
            jwt_secret,
        } = webserver.ok_or_else(|| anyhow!("Missing webserver configuration"))?;
        let webserver = WebServer {
            enable_cors: cors,
            jwt_token_lifetime: jwt_token_lifetime.unwrap_or(DEFAULT_JWT_TOKEN_LIFETIME),
            jwt_secret: jwt_secret.filter(|secret| !secret.trim().is_empty()),
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let toml_name = gw_name.name();
                let gateway = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;
                let gw = match gw_name {
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key } = gateway.opencage.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        log::info!("Use OpenCage reverse geocoding");
                        GeocodingGateway::OpenCage { api_key }
                    }
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim { base_url, timeout } =
                            gateway.nominatim.ok_or_else(|| {
                                anyhow!("Missing '{toml_name}' gateway configuration")
                            })?;
                        log::info!("Use Nominatim reverse geocoding ({base_url})");
                        GeocodingGateway::Nominatim { base_url, timeout }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self {
            db,
            webserver,
            geocoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw.or(raw::Config::try_default()?))
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::try_default().unwrap()).unwrap();
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert!(!cfg.webserver.enable_cors);
        assert_eq!(cfg.webserver.jwt_token_lifetime, DEFAULT_JWT_TOKEN_LIFETIME);
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn load_missing_file() {
        let cfg = Config::try_load_from_file_or_default(Some("does-not-exist.toml")).unwrap();
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn select_nominatim() {
        let cfg = parse(
            r#"
            [webserver]
            cors = true
            jwt-token-lifetime = "2h"
            jwt-secret = ""

            [geocoding]
            gateway = "nominatim"
            "#,
        )
        .unwrap();
        assert!(cfg.webserver.enable_cors);
        assert_eq!(cfg.webserver.jwt_token_lifetime, Duration::from_secs(2 * 60 * 60));
        assert!(cfg.webserver.jwt_secret.is_none());
        assert_eq!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim {
                base_url: "https://nominatim.openstreetmap.org".into(),
                timeout: Duration::from_secs(5),
            })
        );
    }

    #[test]
    fn opencage_requires_an_api_key() {
        let err = parse(
            r#"
            [geocoding]
            gateway = "opencage"
            "#,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("gateway configuration"));
    }

    #[test]
    fn reject_empty_connection_pool() {
        let res = parse(
            r#"
            [db]
            connection-sqlite = ":memory:"
            connection-pool-size = 0
            "#,
        );
        assert!(res.is_err());
    }
}
