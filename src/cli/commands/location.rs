use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::location::{build_google_maps_url, classify_location, get_latest_time_out_entry};
use crate::data::Dataset;
use crate::errors::{AppError, AppResult};
use crate::models::LocationStatus;
use crate::ui::messages::{header, info, kpi_line};
use crate::utils::colors::{color_for_location, paint};

/// Handle the `location` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Location { id, time_in } = cmd {
        let data = Dataset::generate(cfg.anchor());
        let record = data
            .find_record(id)
            .ok_or_else(|| AppError::UnknownRecord(id.clone()))?;

        let (label, entries, recorded, recorded_distance) = if *time_in {
            (
                "Time-in",
                &record.time_in_entries,
                record.time_in_location,
                record.time_in_distance,
            )
        } else {
            (
                "Time-out",
                &record.time_out_entries,
                record.time_out_location,
                record.time_out_distance,
            )
        };

        header(format!("{label} location for {} on {}", record.employee_name, record.date));

        let Some(latest) = get_latest_time_out_entry(entries) else {
            info(format!("No {} samples recorded.", label.to_lowercase()));
            return Ok(());
        };

        kpi_line("Timestamp", &latest.timestamp, None);
        if let (Some(lat), Some(lng)) = (latest.lat, latest.lng) {
            kpi_line("Coordinates", format!("{lat}, {lng}"), None);
        }
        if let Some(addr) = &latest.address {
            kpi_line("Address", addr, None);
        }
        match build_google_maps_url(Some(latest)) {
            Some(url) => kpi_line("Map", url, None),
            None => kpi_line("Map", "no usable location", None),
        }

        let (status, distance) = classify_location(Some(latest), &cfg.office, cfg.geofence_radius_m);
        let measured = match distance {
            Some(d) => format!("{} ({}m from office, radius {}m)", status.describe(), d.round(), cfg.geofence_radius_m),
            None => status.describe().to_string(),
        };
        kpi_line("Geofence", paint(color_for_location(status), &measured), None);

        if recorded != LocationStatus::NoData {
            let noted = match recorded_distance {
                Some(d) => format!("{} ({}m)", recorded.describe(), d.round()),
                None => recorded.describe().to_string(),
            };
            kpi_line("Recorded status", paint(color_for_location(recorded), &noted), None);
        }
    }
    Ok(())
}
