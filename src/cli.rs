use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use tourism_application::prelude as flows;
use tourism_core::{entities::Profile, gateways::geocode::ReverseGeoCodingGateway, usecases};
use tourism_db_sqlite::Connections;
use tourism_gateways::{nominatim::Nominatim, noop::NoGeoCoding, opencage::OpenCage};

use crate::config::{self, Config};

#[derive(Parser)]
#[command(version, about = "Backend of the smart tourism platform")]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Create an account with admin privileges
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "Admin")]
        firstname: String,
        #[arg(long, default_value = "Admin")]
        lastname: String,
    },
    /// Assign a destination to all points of interest
    /// with a position but without a destination
    ResolveDestinations,
}

type GeoCodingGateway = Arc<dyn ReverseGeoCodingGateway + Send + Sync>;

fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GeoCodingGateway> {
    let gw: GeoCodingGateway = match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            Arc::new(OpenCage::new(api_key.clone()))
        }
        Some(config::GeocodingGateway::Nominatim { base_url, timeout }) => {
            Arc::new(Nominatim::new(base_url.clone(), *timeout)?)
        }
        None => {
            log::warn!("No geocoding gateway configured");
            Arc::new(NoGeoCoding)
        }
    };
    Ok(gw)
}

fn init_db(cfg: &config::Db) -> Result<Connections> {
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.conn_sqlite,
        cfg.conn_pool_size
    );
    let connections = Connections::init(&cfg.conn_sqlite, cfg.conn_pool_size)?;
    log::info!("Running embedded database migrations");
    tourism_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}

pub fn run() -> Result<()> {
    let args = Cli::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    let connections = init_db(&cfg.db)?;
    // The blocking HTTP clients of the gateways must be
    // created and dropped outside of the async runtime.
    let geo_gw = geocoding_gateway(&cfg.geocoding)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let webserver_cfg = tourism_webserver::Cfg {
                jwt_token_lifetime: time::Duration::try_from(cfg.webserver.jwt_token_lifetime)?,
                jwt_secret: cfg.webserver.jwt_secret,
            };
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(tourism_webserver::run(
                connections,
                cfg.webserver.enable_cors,
                webserver_cfg,
                Arc::clone(&geo_gw),
            ));
        }
        Command::CreateAdmin {
            email,
            password,
            firstname,
            lastname,
        } => {
            let new_user = usecases::NewUser {
                email,
                password,
                profile: Profile {
                    firstname,
                    lastname,
                    ..Default::default()
                },
            };
            let admin = flows::create_admin(&connections, new_user)
                .map_err(|err| anyhow!("Unable to create admin: {err}"))?;
            println!("Created admin #{} ({})", admin.id, admin.email);
        }
        Command::ResolveDestinations => {
            let backfill = flows::resolve_missing_destinations(&connections, &*geo_gw)?;
            println!(
                "Assigned a destination to {} of {} points of interest ({} failed)",
                backfill.assigned, backfill.candidates, backfill.failed
            );
        }
    }
    Ok(())
}
