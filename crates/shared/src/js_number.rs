//! Serializes an `f64` the way `JSON.stringify` writes numbers: whole values
//! carry no fractional part (`12`, not `12.0`).
//!
//! Use with `#[serde(serialize_with = "kochchef_shared::js_number::serialize")]`.

use serde::Serializer;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return serializer.serialize_i64(*value as i64);
    }

    serializer.serialize_f64(*value)
}
