//! Field coercion rules.
//!
//! Every raw value arrives as a string (from the `.env` file or the process
//! environment). Each function here turns one such string into the field's
//! declared type, or explains why it cannot.

use std::str::FromStr;

use crate::domain::{redact_credentials, ChannelRegistry, MongoSrvDsn};
use crate::shared::error::FieldErrorKind;

/// Strings that read as `true`, compared case-insensitively.
const TRUTHY: [&str; 6] = ["1", "true", "t", "yes", "y", "on"];
/// Strings that read as `false`, compared case-insensitively.
const FALSY: [&str; 6] = ["0", "false", "f", "no", "n", "off"];

pub fn parse_string(raw: &str) -> Result<String, FieldErrorKind> {
    Ok(raw.to_string())
}

pub fn parse_bool(raw: &str) -> Result<bool, FieldErrorKind> {
    let value = raw.trim();
    if TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        Ok(true)
    } else if FALSY.iter().any(|f| f.eq_ignore_ascii_case(value)) {
        Ok(false)
    } else {
        Err(FieldErrorKind::Coercion {
            value: raw.to_string(),
            expected: "a valid boolean",
        })
    }
}

/// Parse any integer type; `expected` names the accepted range in errors.
pub fn parse_int<T: FromStr>(raw: &str, expected: &'static str) -> Result<T, FieldErrorKind> {
    raw.trim().parse().map_err(|_| FieldErrorKind::Coercion {
        value: raw.to_string(),
        expected,
    })
}

pub fn parse_i64(raw: &str) -> Result<i64, FieldErrorKind> {
    parse_int(raw, "a valid integer")
}

/// Normalize an ID list field.
///
/// Accepted shapes:
/// - a single integer: `"-1002209844539"` becomes a one-element list
/// - a JSON array: `"[1, 2]"` passes through unchanged
/// - a comma-separated string: `"1, 2,3"`; empty segments are dropped
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, FieldErrorKind> {
    let value = raw.trim();

    if value.starts_with('[') {
        return serde_json::from_str::<Vec<i64>>(value).map_err(|e| FieldErrorKind::Format {
            value: raw.to_string(),
            reason: format!("expected a JSON array of integers ({e})"),
        });
    }

    if let Ok(id) = value.parse::<i64>() {
        return Ok(vec![id]);
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse::<i64>().map_err(|_| FieldErrorKind::Format {
                value: raw.to_string(),
                reason: format!("segment {segment:?} is not an integer"),
            })
        })
        .collect()
}

/// Rejected values are reported with their credentials masked.
pub fn parse_mongo_dsn(raw: &str) -> Result<MongoSrvDsn, FieldErrorKind> {
    MongoSrvDsn::parse(raw).map_err(|e| FieldErrorKind::Format {
        value: redact_credentials(raw),
        reason: e.to_string(),
    })
}

/// The channel registry is runtime state: whatever a source supplied for it
/// is dropped and an empty registry is returned.
pub fn reset_channels(raw: Option<&str>) -> ChannelRegistry {
    if raw.is_some() {
        tracing::debug!(
            key = super::keys::CHANNELS_N_INVITE,
            "Discarding configured channel registry, it is populated at runtime"
        );
    }
    ChannelRegistry::new()
}
