use serde_json::Value;

use crate::error::DecodeError;
use crate::model::Recipe;

/// Decode the model's raw reply into a [`Recipe`].
///
/// The raw text must be a bare JSON object. Required fields are checked
/// structurally by name and basic type before deserialization, so malformed
/// model output fails predictably instead of crashing downstream rendering.
/// No semantic validation happens here: negative numbers and empty sequences
/// are model-quality issues, not decode failures.
pub fn decode(raw: &str) -> Result<Recipe, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(DecodeError::Malformed)?;

    check_required(&value)?;

    // Residual shape errors (e.g. a non-string ingredient) surface here
    serde_json::from_value(value).map_err(|err| DecodeError::SchemaMismatch(err.to_string()))
}

/// Presence and basic-type check for the required fields, so a mismatch
/// names the offending field.
fn check_required(value: &Value) -> Result<(), DecodeError> {
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::SchemaMismatch("payload is not a JSON object".to_string()))?;

    require(object.get("title").is_some_and(Value::is_string), "title")?;
    require(
        object.get("description").is_some_and(Value::is_string),
        "description",
    )?;

    let time = object
        .get("preparation_time")
        .and_then(Value::as_object)
        .ok_or_else(|| missing("preparation_time"))?;
    require(
        time.get("total").is_some_and(Value::is_number),
        "preparation_time.total",
    )?;

    require(
        object.get("ingredients").is_some_and(Value::is_array),
        "ingredients",
    )?;
    require(
        object.get("instructions").is_some_and(Value::is_array),
        "instructions",
    )?;

    Ok(())
}

fn require(present: bool, field: &'static str) -> Result<(), DecodeError> {
    if present {
        Ok(())
    } else {
        Err(missing(field))
    }
}

fn missing(field: &'static str) -> DecodeError {
    DecodeError::SchemaMismatch(format!("missing or wrong-typed field `{field}`"))
}
