use crate::priority::Priority;
use serde::Serialize;

/// Initial camera state of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

/// Geographic bounding box in decimal degrees.
///
/// Well-formed boxes satisfy `north > south` and `east > west`; boxes crossing the
/// antimeridian are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl RegionBounds {
    /// Returns `true` when the point lies inside the box, edges included.
    ///
    /// Any comparison against `NaN` is false, so a `NaN` coordinate is never inside.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south
            && latitude <= self.north
            && longitude >= self.west
            && longitude <= self.east
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.north > self.south && self.east > self.west
    }
}

/// Category of a strategic location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Capital,
    Port,
    Tourism,
    Border,
    Military,
    Airport,
}

/// A point of interest highlighted on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategicLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub priority: Priority,
}

/// Returns `true` when `latitude` is a valid decimal-degree latitude.
#[must_use]
pub fn is_valid_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

/// Returns `true` when `longitude` is a valid decimal-degree longitude.
#[must_use]
pub fn is_valid_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}
