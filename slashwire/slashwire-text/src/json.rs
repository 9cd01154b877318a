//! Conversion between message values and canonical JSON.

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, SecondsFormat};
use serde_json::{Map, Number, Value as Json};
use slashwire_core::{
    CodecOptions, FieldDescriptor, FieldKind, MessageDescriptor, MessageValue, Timestamp, Value,
    well_known::{self, FIELD_MASK, TIMESTAMP},
};

use crate::error::TextError;

/// Render `value` as a JSON tree.
///
/// Keys are lowerCamelCase field names. Fields holding their default are
/// omitted, the same rule the binary encoder applies. Enums are written by
/// symbolic name, bytes as standard base64, timestamps as RFC 3339 strings
/// and field masks as comma-joined camelCase paths.
///
/// Timestamps keep every fraction digit they carry. A pair that names no
/// calendar instant, such as one with `nanos` outside `[0, 999_999_999]`,
/// is written as a plain `{"seconds", "nanos"}` object instead.
pub fn to_json(value: &MessageValue) -> Result<Json, TextError> {
    let descriptor = value.descriptor();
    if descriptor.is(&TIMESTAMP) {
        match Timestamp::from_message(value).and_then(|ts| ts.to_datetime()) {
            Ok(dt) => return Ok(Json::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
            Err(err) => tracing::debug!(%err, "writing timestamp as a seconds/nanos object"),
        }
    } else if descriptor.is(&FIELD_MASK) {
        let paths: Vec<String> = well_known::field_mask_paths(value)?
            .iter()
            .map(|p| camel_path(p))
            .collect();
        return Ok(Json::String(paths.join(",")));
    }

    let mut object = Map::new();
    for (field, v) in value.iter_present() {
        object.insert(field.json_name(), field_to_json(field, v)?);
    }
    Ok(Json::Object(object))
}

fn field_to_json(field: &FieldDescriptor, value: &Value) -> Result<Json, TextError> {
    if field.repeated {
        return value
            .try_list()?
            .iter()
            .map(|item| element_to_json(field.kind, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array);
    }
    element_to_json(field.kind, value)
}

fn element_to_json(kind: FieldKind, value: &Value) -> Result<Json, TextError> {
    let json = match kind {
        FieldKind::Int32 => Json::from(value.try_i32()?),
        FieldKind::Int64 => Json::from(value.try_i64()?),
        FieldKind::UInt64 => Json::from(value.try_u64()?),
        FieldKind::Bool => Json::Bool(value.try_bool()?),
        FieldKind::Double => float_to_json(value.try_f64()?),
        FieldKind::Float => float_to_json(f64::from(value.try_f32()?)),
        FieldKind::String => Json::from(value.try_str()?),
        FieldKind::Bytes => Json::String(STANDARD.encode(value.try_bytes()?)),
        FieldKind::Enum(mapping) => Json::from(mapping.name_of(value.try_enum()?)),
        FieldKind::Message(_) => match value.try_message()? {
            Some(nested) => to_json(nested)?,
            None => Json::Null,
        },
    };
    Ok(json)
}

fn float_to_json(v: f64) -> Json {
    match Number::from_f64(v) {
        Some(n) => Json::Number(n),
        None if v.is_nan() => Json::from("NaN"),
        None if v > 0.0 => Json::from("Infinity"),
        None => Json::from("-Infinity"),
    }
}

/// Build a message of type `descriptor` from a JSON tree.
///
/// Both lowerCamelCase and declared field names are accepted. A timestamp
/// may also be given in its `{"seconds", "nanos"}` object form. Unknown keys
/// are ignored and `null` leaves a field at its default. A value of the
/// wrong JSON type is an error; nothing is coerced silently.
pub fn from_json(
    descriptor: &'static MessageDescriptor,
    json: &Json,
    options: &CodecOptions,
) -> Result<MessageValue, TextError> {
    if descriptor.is(&TIMESTAMP) && !json.is_object() {
        return Ok(timestamp_from_json(json)?.to_message());
    }
    if descriptor.is(&FIELD_MASK) {
        return field_mask_from_json(json);
    }

    let Json::Object(object) = json else {
        return Err(TextError::ExpectedObject {
            message: descriptor.full_name,
        });
    };
    let mut message = MessageValue::new(descriptor);
    for (key, item) in object {
        let Some((index, field)) = descriptor.field_by_json_name(key) else {
            tracing::debug!(
                message = descriptor.full_name,
                key = key.as_str(),
                "ignoring unknown JSON key"
            );
            continue;
        };
        if item.is_null() {
            continue;
        }
        let value = field_from_json(field, item, options)?;
        if let Some(slot) = message.field_at_mut(index) {
            *slot = value;
        }
    }
    Ok(message)
}

fn field_from_json(
    field: &FieldDescriptor,
    json: &Json,
    options: &CodecOptions,
) -> Result<Value, TextError> {
    if !field.repeated {
        return element_from_json(field, json, options);
    }
    let Json::Array(items) = json else {
        return Err(mismatch(field, "an array", json));
    };
    items
        .iter()
        .map(|item| element_from_json(field, item, options))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
}

fn element_from_json(
    field: &FieldDescriptor,
    json: &Json,
    options: &CodecOptions,
) -> Result<Value, TextError> {
    let value = match field.kind {
        FieldKind::Int32 => Value::I32(int32_from_json(field, json)?),
        FieldKind::Int64 => {
            let n = integer_from_json(field, json)?;
            Value::I64(options.int64_repr.check_i64(field.name, n)?)
        }
        FieldKind::UInt64 => {
            let n = unsigned_from_json(field, json)?;
            Value::U64(options.int64_repr.check_u64(field.name, n)?)
        }
        FieldKind::Bool => Value::Bool(
            json.as_bool()
                .ok_or_else(|| mismatch(field, "a boolean", json))?,
        ),
        FieldKind::Double => Value::F64(float_from_json(field, json)?),
        FieldKind::Float => {
            let wide = float_from_json(field, json)?;
            let narrow = wide as f32;
            if wide.is_finite() && !narrow.is_finite() {
                return Err(TextError::invalid(
                    field.name,
                    format!("{wide} is out of range for float"),
                ));
            }
            Value::F32(narrow)
        }
        FieldKind::String => Value::string(
            json.as_str()
                .ok_or_else(|| mismatch(field, "a string", json))?,
        ),
        FieldKind::Bytes => {
            let text = json
                .as_str()
                .ok_or_else(|| mismatch(field, "a base64 string", json))?;
            let bytes = STANDARD
                .decode(text)
                .map_err(|source| TextError::InvalidBase64 {
                    field: field.name,
                    source,
                })?;
            Value::bytes(bytes)
        }
        FieldKind::Enum(mapping) => match json {
            Json::String(name) => Value::Enum(mapping.value_of(name.as_str())),
            Json::Number(_) => Value::Enum(mapping.resolve(int32_from_json(field, json)?)),
            other => return Err(mismatch(field, "an enum name or number", other)),
        },
        FieldKind::Message(nested) => Value::message(from_json(nested, json, options)?),
    };
    Ok(value)
}

fn int32_from_json(field: &FieldDescriptor, json: &Json) -> Result<i32, TextError> {
    let n = integer_from_json(field, json)?;
    i32::try_from(n)
        .map_err(|_| TextError::invalid(field.name, format!("{n} is out of range for int32")))
}

/// Integers are accepted as JSON numbers or decimal strings.
fn integer_from_json(field: &FieldDescriptor, json: &Json) -> Result<i64, TextError> {
    match json {
        Json::Number(n) => n
            .as_i64()
            .ok_or_else(|| TextError::invalid(field.name, format!("{n} is not a 64-bit integer"))),
        Json::String(s) => s
            .parse::<i64>()
            .map_err(|e| TextError::invalid(field.name, format!("'{s}': {e}"))),
        other => Err(mismatch(field, "an integer", other)),
    }
}

fn unsigned_from_json(field: &FieldDescriptor, json: &Json) -> Result<u64, TextError> {
    match json {
        Json::Number(n) => n.as_u64().ok_or_else(|| {
            TextError::invalid(field.name, format!("{n} is not an unsigned 64-bit integer"))
        }),
        Json::String(s) => s
            .parse::<u64>()
            .map_err(|e| TextError::invalid(field.name, format!("'{s}': {e}"))),
        other => Err(mismatch(field, "an unsigned integer", other)),
    }
}

fn float_from_json(field: &FieldDescriptor, json: &Json) -> Result<f64, TextError> {
    match json {
        Json::Number(n) => n
            .as_f64()
            .ok_or_else(|| TextError::invalid(field.name, format!("{n} is not a number"))),
        Json::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other
                .parse::<f64>()
                .map_err(|e| TextError::invalid(field.name, format!("'{other}': {e}"))),
        },
        other => Err(mismatch(field, "a number", other)),
    }
}

fn timestamp_from_json(json: &Json) -> Result<Timestamp, TextError> {
    let Json::String(text) = json else {
        return Err(TextError::invalid(
            TIMESTAMP.full_name,
            format!("expected an RFC 3339 string, found {}", json_type(json)),
        ));
    };
    let dt = DateTime::parse_from_rfc3339(text).map_err(|source| TextError::InvalidTimestamp {
        value: text.clone(),
        source,
    })?;
    Ok(Timestamp::new(
        dt.timestamp(),
        dt.timestamp_subsec_nanos() as i32,
    )?)
}

fn field_mask_from_json(json: &Json) -> Result<MessageValue, TextError> {
    let Json::String(text) = json else {
        return Err(TextError::invalid(
            FIELD_MASK.full_name,
            format!("expected a comma-separated string, found {}", json_type(json)),
        ));
    };
    Ok(well_known::field_mask(
        text.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(snake_path),
    ))
}

/// `og_metadata.title` -> `ogMetadata.title`
fn camel_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut upper_next = false;
    for ch in path.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `ogMetadata.title` -> `og_metadata.title`
fn snake_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 4);
    for ch in path.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn mismatch(field: &FieldDescriptor, expected: &str, found: &Json) -> TextError {
    TextError::invalid(
        field.name,
        format!("expected {expected}, found {}", json_type(found)),
    )
}

fn json_type(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
