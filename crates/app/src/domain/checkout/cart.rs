//! Cart request parsing and normalization.

use serde_json::Value;

use crate::domain::checkout::errors::CheckoutError;

/// Largest quantity a single cart line may request.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One normalized line of a checkout request. Carries no price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequestLine {
    /// Product slug, coerced to a string and never empty.
    pub slug: String,
    /// Requested units, already clamped to `1..=MAX_LINE_QUANTITY`.
    pub quantity: u32,
}

/// Parse a raw checkout body into normalized cart lines.
///
/// A missing or null `items` field counts as an empty cart. Lines whose slug
/// is empty after coercion are dropped. Client-supplied prices or price
/// references on a line are ignored.
///
/// # Errors
///
/// Returns [`CheckoutError::InvalidJson`] when the body is not a JSON object
/// or `items` is present but not an array.
pub fn parse_cart(body: &[u8]) -> Result<Vec<CartRequestLine>, CheckoutError> {
    let body: Value = serde_json::from_slice(body).map_err(|error| {
        tracing::debug!(error = %error, "rejecting malformed checkout body");
        CheckoutError::InvalidJson
    })?;

    let Value::Object(mut fields) = body else {
        return Err(CheckoutError::InvalidJson);
    };

    let items = match fields.remove("items") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(CheckoutError::InvalidJson),
    };

    Ok(items.iter().filter_map(normalize_line).collect())
}

fn normalize_line(item: &Value) -> Option<CartRequestLine> {
    let slug = item.get("slug").map(coerce_slug).unwrap_or_default();

    if slug.is_empty() {
        return None;
    }

    let quantity = item.get("quantity").map_or(1, normalize_qty);

    Some(CartRequestLine { slug, quantity })
}

/// Coerce a raw slug value to a string. Strings are kept as-is; numbers and
/// booleans use their display form; anything else becomes empty.
///
/// Whole-number floats drop their fraction, so `1.0` becomes `"1"`.
#[must_use]
pub fn coerce_slug(value: &Value) -> String {
    match value {
        Value::String(slug) => slug.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => float_slug(float),
            _ => number.to_string(),
        },
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn float_slug(float: f64) -> String {
    if float.is_finite() && float.fract().abs() < f64::EPSILON {
        // `-0.0 + 0.0` is `0.0`
        format!("{:.0}", float + 0.0)
    } else {
        float.to_string()
    }
}

/// Normalize a raw quantity into `1..=MAX_LINE_QUANTITY`.
///
/// Numbers and numeric strings are truncated toward zero then clamped.
/// Anything non-numeric (or non-finite) counts as 1.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped into 1..=99 before the cast"
)]
pub fn normalize_qty(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    };

    match raw {
        Some(raw) if raw.is_finite() => raw.trunc().clamp(1.0, f64::from(MAX_LINE_QUANTITY)) as u32,
        _ => 1,
    }
}

/// Distinct slugs in first-seen order.
#[must_use]
pub fn distinct_slugs(lines: &[CartRequestLine]) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();

    lines
        .iter()
        .filter(|line| seen.insert(line.slug.as_str()))
        .map(|line| line.slug.clone())
        .collect()
}
