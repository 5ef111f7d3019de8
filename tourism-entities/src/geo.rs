use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const LAT_MIN: f64 = -90.0;
    pub const LAT_MAX: f64 = 90.0;
    pub const LNG_MIN: f64 = -180.0;
    pub const LNG_MAX: f64 = 180.0;

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Only returns a point if both coordinates are within their valid range.
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Option<Self> {
        let pt = Self::from_lat_lng_deg(lat, lng);
        pt.is_valid().then_some(pt)
    }

    /// Combines optional coordinates, e.g. as stored for a point of interest.
    pub fn try_from_opt_lat_lng_deg(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Self::try_from_lat_lng_deg(lat, lng),
            _ => None,
        }
    }

    pub fn lat_deg(self) -> f64 {
        self.lat
    }

    pub fn lng_deg(self) -> f64 {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (Self::LAT_MIN..=Self::LAT_MAX).contains(&self.lat)
            && (Self::LNG_MIN..=Self::LNG_MAX).contains(&self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_points() {
        assert!(MapPoint::try_from_lat_lng_deg(36.8, 10.18).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90, 180).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0, -180.5).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0).is_none());
    }

    #[test]
    fn optional_coordinates() {
        assert!(MapPoint::try_from_opt_lat_lng_deg(None, Some(10.0)).is_none());
        assert!(MapPoint::try_from_opt_lat_lng_deg(Some(36.0), None).is_none());
        assert!(MapPoint::try_from_opt_lat_lng_deg(None, None).is_none());
        assert_eq!(
            Some((36.0, 10.0)),
            MapPoint::try_from_opt_lat_lng_deg(Some(36.0), Some(10.0)).map(MapPoint::to_lat_lng_deg)
        );
    }
}
