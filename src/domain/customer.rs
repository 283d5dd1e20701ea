// Customer domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const SOLAR_MARKER: &str = "光伏";
pub const STORAGE_MARKER: &str = "储能";
pub const EV_CHARGING_MARKER: &str = "充电";
pub const OTHER_MARKER: &str = "其他";

/// Resource kind a demand type string falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandCategory {
    Solar,
    Storage,
    EvCharging,
    Other,
}

impl DemandCategory {
    /// Classify by substring containment. The first matching marker wins, so
    /// "光伏-储能试点" is solar only.
    pub fn classify(demand_type: &str) -> Self {
        if demand_type.contains(SOLAR_MARKER) {
            DemandCategory::Solar
        } else if demand_type.contains(STORAGE_MARKER) {
            DemandCategory::Storage
        } else if demand_type.contains(EV_CHARGING_MARKER) {
            DemandCategory::EvCharging
        } else {
            DemandCategory::Other
        }
    }
}

/// One registered resource site as stored in the `customers` collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub province: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "capacity_from_any")]
    pub capacity_mw: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub demand_type: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Materialize a record that never reached the store.
    pub fn from_new(record: NewCustomer, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            company_name: record.company_name,
            province: record.province,
            city: record.city,
            capacity_mw: record.capacity_mw,
            demand_type: record.demand_type,
            industry: record.industry,
            contact_name: record.contact_name,
            contact_phone: record.contact_phone,
            created_at: Some(created_at),
        }
    }

    pub fn category(&self) -> DemandCategory {
        DemandCategory::classify(&self.demand_type)
    }
}

/// Insertable shape of a customer; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomer {
    pub company_name: String,
    pub province: String,
    pub city: String,
    pub capacity_mw: f64,
    pub demand_type: String,
    pub industry: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
}

/// Coerce a loosely typed capacity to megawatts. Anything that is not a
/// finite, non-negative number becomes 0.
pub fn coerce_capacity(value: &serde_json::Value) -> f64 {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => parse_capacity(s).into(),
        _ => None,
    };
    sanitize(raw.unwrap_or(0.0))
}

/// Parse a stored capacity string. The whole string must be a number.
pub fn parse_capacity(text: &str) -> f64 {
    sanitize(text.trim().parse::<f64>().unwrap_or(0.0))
}

/// Parse capacity text as typed into the registration form. Reads the
/// longest leading number, so "12.5MW" is 12.5.
pub fn parse_form_capacity(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if mantissa_end < bytes.len() && bytes[mantissa_end] == b'.' {
        mantissa_end = digits_from(mantissa_end + 1);
    }
    // needs at least one digit on either side of the point
    if mantissa_end - end <= usize::from(int_end < mantissa_end) {
        return 0.0;
    }

    let mut number_end = mantissa_end;
    if number_end < bytes.len() && (bytes[number_end] == b'e' || bytes[number_end] == b'E') {
        let mut exp = number_end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            number_end = exp_end;
        }
    }

    sanitize(text[..number_end].parse::<f64>().unwrap_or(0.0))
}

fn sanitize(mw: f64) -> f64 {
    if mw.is_finite() && mw >= 0.0 { mw } else { 0.0 }
}

fn capacity_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_capacity(&value))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Stores hand out uuid strings or bigint keys depending on schema
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .ok()
    }))
}
