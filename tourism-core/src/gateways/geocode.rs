use tourism_entities::geo::MapPoint;

pub trait ReverseGeoCodingGateway {
    /// Look up the label of the administrative region (e.g. the governorate)
    /// that contains the given position.
    ///
    /// `Ok(None)` means the service answered but did not know a region.
    fn resolve_region_label(&self, pos: MapPoint) -> anyhow::Result<Option<String>>;
}

impl<T> ReverseGeoCodingGateway for &T
where
    T: ReverseGeoCodingGateway + ?Sized,
{
    fn resolve_region_label(&self, pos: MapPoint) -> anyhow::Result<Option<String>> {
        (**self).resolve_region_label(pos)
    }
}

impl<T> ReverseGeoCodingGateway for std::sync::Arc<T>
where
    T: ReverseGeoCodingGateway + ?Sized,
{
    fn resolve_region_label(&self, pos: MapPoint) -> anyhow::Result<Option<String>> {
        (**self).resolve_region_label(pos)
    }
}
