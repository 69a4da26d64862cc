//! Provider-mandated parameter defaults
//!
//! Only keys already present in the input are touched. A rule fills in or
//! normalizes the value of its key; keys without a rule pass through.

use super::models::all_user_fields;
use super::params::{ParamValue, ParameterSet};
use serde_json::Value;

/// Resolve defaults for a raw parameter set.
///
/// `None` resolves to an empty set. The output has exactly the input's keys,
/// in the input's order.
pub fn resolve_defaults(params: Option<&ParameterSet>) -> ParameterSet {
    let Some(params) = params else {
        return ParameterSet::new();
    };

    params
        .iter()
        .map(|(key, value)| (key, resolve_value(key, value)))
        .collect()
}

fn resolve_value(key: &str, value: &ParamValue) -> ParamValue {
    match key {
        "offset" => ParamValue::Integer(offset_value(value)),
        "user_fields" if value.is_null() => ParamValue::Text(all_user_fields()),
        _ => value.clone(),
    }
}

// Anything that does not read as a whole integer counts as the first page, so
// a string with trailing garbage such as "5abc" resolves to 0 rather than 5.
fn offset_value(value: &ParamValue) -> i64 {
    match value {
        ParamValue::Integer(n) => *n,
        ParamValue::Text(s) => s.trim().parse().unwrap_or(0),
        ParamValue::Opaque(Value::Number(n)) => n.as_i64().unwrap_or(0),
        ParamValue::Opaque(Value::String(s)) => s.trim().parse().unwrap_or(0),
        ParamValue::Null | ParamValue::Opaque(_) => 0,
    }
}
