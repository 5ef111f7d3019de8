use std::collections::HashMap;

use anyhow::Result;
use geocoding::{Opencage, Point};
use serde_json::Value;
use tourism_core::{entities::MapPoint, gateways::geocode::ReverseGeoCodingGateway};

/// Reverse geocoding with the OpenCage API.
///
/// The region label is taken from the `state` component,
/// e.g. "Gouvernorat de Sousse".
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub const fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

const REGION_COMPONENT: &str = "state";

fn region_label(components: &HashMap<String, Value>) -> Option<String> {
    components
        .get(REGION_COMPONENT)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(ToOwned::to_owned)
}

impl ReverseGeoCodingGateway for OpenCage {
    fn resolve_region_label(&self, pos: MapPoint) -> Result<Option<String>> {
        let oc_req = Opencage::new(self.api_key.clone());
        let point = Point::new(pos.lng_deg(), pos.lat_deg());
        let res = oc_req.reverse_full(&point)?;
        let label = res
            .results
            .iter()
            .find_map(|result| region_label(&result.components));
        log::debug!("Resolved region of {pos}: {label:?}");
        Ok(label)
    }
}
