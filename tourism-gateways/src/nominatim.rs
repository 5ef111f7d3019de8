use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use tourism_core::{entities::MapPoint, gateways::geocode::ReverseGeoCodingGateway};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("smart-tourism/", env!("CARGO_PKG_VERSION"));

/// Reverse geocoding with a Nominatim instance.
///
/// The region label is taken from `address.state`.
#[derive(Debug, Clone)]
pub struct Nominatim {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Nominatim {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Address {
    state: Option<String>,
}

fn region_label(response: ReverseResponse) -> Option<String> {
    let ReverseResponse { address, error } = response;
    if let Some(error) = error {
        // Positions in the middle of the sea are answered
        // with an error message instead of an address.
        log::debug!("Nominatim could not resolve the position: {error}");
        return None;
    }
    address
        .and_then(|a| a.state)
        .map(|label| label.trim().to_owned())
        .filter(|label| !label.is_empty())
}

impl ReverseGeoCodingGateway for Nominatim {
    fn resolve_region_label(&self, pos: MapPoint) -> Result<Option<String>> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_owned()),
                ("lat", pos.lat_deg().to_string()),
                ("lon", pos.lng_deg().to_string()),
                ("zoom", "5".to_owned()),
            ])
            .send()?
            .error_for_status()?
            .json::<ReverseResponse>()?;
        let label = region_label(response);
        log::debug!("Resolved region of {pos}: {label:?}");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ReverseResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn take_the_state_of_the_address() {
        let response = parse(
            r#"{
                "place_id": 1234,
                "display_name": "Sousse, Tunisie",
                "address": {
                    "state": "Gouvernorat de Sousse",
                    "country": "Tunisie",
                    "country_code": "tn"
                }
            }"#,
        );
        assert_eq!(
            Some("Gouvernorat de Sousse".into()),
            region_label(response)
        );
    }

    #[test]
    fn no_region_without_state() {
        let response = parse(r#"{ "address": { "country": "Tunisie" } }"#);
        assert_eq!(None, region_label(response));
        let response = parse(r#"{ "error": "Unable to geocode" }"#);
        assert_eq!(None, region_label(response));
    }

    #[test]
    fn strip_trailing_slash_of_base_url() {
        let gw = Nominatim::new("http://localhost:8080/".into(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!("http://localhost:8080", gw.base_url);
    }
}
