pub mod nominatim;
pub mod noop;
pub mod opencage;
