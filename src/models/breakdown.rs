use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// One user's contribution to a KPI total over the selected range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    #[serde(default)]
    pub user_name: String,
    #[serde(default, deserialize_with = "value_or_zero")]
    pub value: f64,
    #[serde(default)]
    pub secondary_info: String,
}

impl BreakdownRow {
    pub fn new(user_name: impl Into<String>, value: f64, secondary_info: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            value,
            secondary_info: secondary_info.into(),
        }
    }

    /// Value used for ranking and totals: NaN counts as zero, `-0.0` as `0.0`.
    pub fn numeric_value(&self) -> f64 {
        if self.value.is_nan() || self.value == 0.0 {
            0.0
        } else {
            self.value
        }
    }
}

/// Parse a textual KPI value; anything that is not a number is `0`.
///
/// Rust's float parser also takes `inf`, `infinity` and `nan` in any case.
/// Only the exact spellings `Infinity`, `+Infinity` and `-Infinity` count as
/// infinite here; every other non-finite result reads as `0`.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Other(IgnoredAny),
}

/// Rows loaded from JSON may carry `"3"`, `null` or `true` as value.
fn value_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Number(n) => n,
        RawValue::Text(s) => parse_number_or_zero(&s),
        RawValue::Bool(b) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
        RawValue::Other(_) => 0.0,
    })
}
