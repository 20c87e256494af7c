use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::location::build_google_maps_url;
use crate::errors::{AppError, AppResult};
use crate::models::LocationEntry;

/// Handle the `maps-url` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::MapsUrl { lat, lng, address } = cmd {
        let location = LocationEntry {
            timestamp: String::new(),
            lat: *lat,
            lng: *lng,
            address: address.clone(),
        };

        let url = build_google_maps_url(Some(&location)).ok_or_else(|| {
            AppError::InvalidLocation("give finite --lat and --lng, or a non-empty --address".into())
        })?;
        println!("{url}");
    }
    Ok(())
}
