use crate::errors::AppResult;
use serde_yaml::Value;

/// Keys a complete configuration file carries.
pub const KNOWN_KEYS: [&str; 7] = [
    "anchor_date",
    "default_range",
    "page_size",
    "geofence_radius_m",
    "office",
    "log_level",
    "separator_char",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Known keys absent from the file (their defaults apply).
    pub missing: Vec<&'static str>,
    /// Keys the file has that tkdash does not read.
    pub unknown: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

/// Compare the keys in a YAML document against the known ones.
pub fn check_keys(content: &str) -> AppResult<CheckReport> {
    let yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content)?
    };

    let mut report = CheckReport::default();
    let Some(map) = yaml.as_mapping() else {
        report.missing = KNOWN_KEYS.to_vec();
        return Ok(report);
    };

    for key in KNOWN_KEYS {
        if !map.contains_key(key) {
            report.missing.push(key);
        }
    }

    for key in map.keys() {
        if let Some(k) = key.as_str()
            && !KNOWN_KEYS.contains(&k)
        {
            report.unknown.push(k.to_string());
        }
    }

    Ok(report)
}
