use serde::{Deserialize, Serialize};

/// Anything that can be pointed at on a map: optional coordinates and/or a
/// free-text address.
pub trait HasLocation {
    fn lat(&self) -> Option<f64>;
    fn lng(&self) -> Option<f64>;
    fn address(&self) -> Option<&str>;

    /// Both coordinates present and finite.
    fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat(), self.lng()) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// One geolocation sample tied to a clock-in/out event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LocationEntry {
    pub fn at(timestamp: impl Into<String>, point: &GeoPoint) -> Self {
        Self {
            timestamp: timestamp.into(),
            lat: Some(point.lat),
            lng: Some(point.lng),
            address: point.address.clone(),
        }
    }
}

impl HasLocation for LocationEntry {
    fn lat(&self) -> Option<f64> {
        self.lat
    }
    fn lng(&self) -> Option<f64> {
        self.lng
    }
    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Fixed reference point (office, store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64, address: Option<&str>) -> Self {
        Self {
            lat,
            lng,
            address: address.map(str::to_string),
        }
    }

    /// FERN Building I, Sampaloc, Manila.
    pub fn office() -> Self {
        Self::new(
            14.6048,
            120.9884,
            Some("Unit 503, 5th Floor, FERN Building I, 827 P. Paredes Street, Sampaloc, Barangay 468"),
        )
    }

    /// Rizal Park, used by the dataset for out-of-radius samples.
    pub fn rizal_park() -> Self {
        Self::new(
            14.5825,
            120.9798,
            Some("Rizal Park, Ermita, Manila, 1000 Metro Manila"),
        )
    }
}

impl HasLocation for GeoPoint {
    fn lat(&self) -> Option<f64> {
        Some(self.lat)
    }
    fn lng(&self) -> Option<f64> {
        Some(self.lng)
    }
    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Geofence classification shown next to clock events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStatus {
    Compliant,
    Outside,
    NoData,
}

impl LocationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationStatus::Compliant => "compliant",
            LocationStatus::Outside => "outside",
            LocationStatus::NoData => "no-data",
        }
    }

    /// Accepts `nodata` too, as the records filter does.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "compliant" => Some(LocationStatus::Compliant),
            "outside" => Some(LocationStatus::Outside),
            "no-data" | "nodata" => Some(LocationStatus::NoData),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LocationStatus::Compliant => "Within allowed radius",
            LocationStatus::Outside => "Outside allowed radius",
            LocationStatus::NoData => "No location data",
        }
    }
}
