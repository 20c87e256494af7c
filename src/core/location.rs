//! Map links and geofence checks for clock-event locations.

use crate::models::{GeoPoint, HasLocation, LocationEntry, LocationStatus};
use crate::utils::date::parse_timestamp_or_none;
use chrono::NaiveDateTime;

const MAPS_COORDINATES_URL: &str = "https://www.google.com/maps?q=";
const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Map lookup URL for a location.
///
/// Finite coordinates take precedence over the address. Without either, or
/// without a location at all, there is no link.
pub fn build_google_maps_url<L: HasLocation + ?Sized>(location: Option<&L>) -> Option<String> {
    let location = location?;

    if let Some((lat, lng)) = location.coordinates() {
        return Some(format!(
            "{MAPS_COORDINATES_URL}{},{}",
            format_coordinate(lat),
            format_coordinate(lng)
        ));
    }

    match location.address().map(str::trim) {
        Some(addr) if !addr.is_empty() => Some(format!(
            "{MAPS_SEARCH_URL}{}",
            encode_uri_component(addr)
        )),
        _ => {
            tracing::debug!("location has neither coordinates nor address");
            None
        }
    }
}

/// Shortest round-trip decimal form, with `-0` printed as `0`.
pub fn format_coordinate(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}

/// Percent-encode a query component. `! ' ( ) *` stay literal like the
/// browser's `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Most recent entry by timestamp.
///
/// Entries with unparseable timestamps are ignored; if none parse, the last
/// entry as given is returned. On equal timestamps the earlier entry wins.
pub fn get_latest_time_out_entry(entries: &[LocationEntry]) -> Option<&LocationEntry> {
    let mut latest: Option<(NaiveDateTime, &LocationEntry)> = None;

    for entry in entries {
        let Some(ts) = parse_timestamp_or_none(&entry.timestamp) else {
            continue;
        };
        if latest.is_none_or(|(best, _)| ts > best) {
            latest = Some((ts, entry));
        }
    }

    match latest {
        Some((_, entry)) => Some(entry),
        None => {
            if !entries.is_empty() {
                tracing::debug!("no parseable timestamps, using last entry");
            }
            entries.last()
        }
    }
}

/// Great-circle distance in meters between two `(lat, lng)` pairs.
pub fn haversine_distance_m(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lng2) = (b.0.to_radians(), b.1.to_radians());

    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Geofence status of a sample against a reference point.
///
/// The distance is returned whenever the sample has coordinates. A
/// non-positive or non-finite radius treats every sample as outside.
pub fn classify_location<L: HasLocation + ?Sized>(
    sample: Option<&L>,
    reference: &GeoPoint,
    radius_m: f64,
) -> (LocationStatus, Option<f64>) {
    let Some(coords) = sample.and_then(|s| s.coordinates()) else {
        return (LocationStatus::NoData, None);
    };

    let distance = haversine_distance_m(coords, (reference.lat, reference.lng));
    let status = if radius_m.is_finite() && radius_m > 0.0 && distance <= radius_m {
        LocationStatus::Compliant
    } else {
        LocationStatus::Outside
    };

    (status, Some(distance))
}
