use anyhow::Result;
use tourism_core::{entities::MapPoint, gateways::geocode::ReverseGeoCodingGateway};

/// Used when no geocoding service is configured.
///
/// Every position remains without a region and
/// points of interest stay unassigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeoCoding;

impl ReverseGeoCodingGateway for NoGeoCoding {
    fn resolve_region_label(&self, pos: MapPoint) -> Result<Option<String>> {
        log::debug!("Cannot resolve the region of {pos} because no geocoding gateway was configured");
        Ok(None)
    }
}
