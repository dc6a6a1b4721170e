//! Depth-first traversals that turn a nested [`Value`] into flat output.
//!
//! Two variants share the same descent and key encoding:
//!
//! - the **map** variant stores leaves in a [`FlatMap`]. An array whose items
//!   are all strings or numbers counts as a leaf and is stored whole, so
//!   coordinate pairs and tag lists stay intact;
//! - the **list** variant descends into every map and array and emits one
//!   `path.value` string per scalar.
//!
//! Only the outermost segment is joined without a connective; every nested
//! segment goes through [`Style`]. Two different paths that encode to the same
//! flat key are not detected: the one visited last wins.

use crate::error::{Error, Result};
use crate::key::encode_key;
use crate::{FlatMap, FlattenOptions, Map, Style, Value};
use log::{debug, trace};

/// Returns `true` when every item is a string or a number.
///
/// Booleans and nulls do not count, so `[true, false]` is expanded by the map
/// variant while `[1, 2]` is kept whole. An empty array qualifies.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{all_scalars, tree};
///
/// let pair = tree!([1.5, 2]);
/// assert!(all_scalars(pair.as_array().unwrap()));
///
/// let mixed = tree!(["a", {"b": 1}]);
/// assert!(!all_scalars(mixed.as_array().unwrap()));
/// ```
#[must_use]
pub fn all_scalars(items: &[Value]) -> bool {
    items.iter().all(|item| match item {
        Value::String(_) | Value::Number(_) => true,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => false,
    })
}

/// Flattens a nested map into a single-level map.
///
/// `prefix` is prepended to every key with no separator before the first
/// segment.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{flatten, tree, Style, Value};
///
/// let nested = tree!({
///     "one": {"two": ["2a", {"three": "3"}]},
///     "side": "value"
/// });
/// let flat = flatten(nested.as_object().unwrap(), "", Style::Dot).unwrap();
///
/// assert_eq!(flat.get("one.two.0"), Some(&Value::from("2a")));
/// assert_eq!(flat.get("one.two.1.three"), Some(&Value::from("3")));
/// assert_eq!(flat.get("side"), Some(&Value::from("value")));
/// ```
///
/// # Errors
///
/// Never fails for a map input; the `Result` matches the other entry points.
pub fn flatten(nested: &Map, prefix: &str, style: Style) -> Result<FlatMap> {
    debug!(
        "flattening map of {} entries (style={}, prefix={:?})",
        nested.len(),
        style,
        prefix
    );
    let mut flat = FlatMap::new();
    flatten_map(true, &mut flat, nested, prefix, style)?;
    Ok(flat)
}

/// Flattens any map or array into a single-level map.
///
/// A top-level array is keyed by index: `["a", {"b": 1}]` becomes
/// `{"0": "a", "1.b": 1}` in dot style.
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `nested` is a scalar.
pub fn flatten_value(nested: &Value, prefix: &str, style: Style) -> Result<FlatMap> {
    debug!(
        "flattening {} to map (style={}, prefix={:?})",
        nested.kind(),
        style,
        prefix
    );
    let mut flat = FlatMap::new();
    flatten_into(true, &mut flat, nested, prefix, style)?;
    Ok(flat)
}

/// Map variant driven by [`FlattenOptions`]; `sorted` orders the output keys.
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `nested` is a scalar.
pub fn flatten_with_options(nested: &Value, options: &FlattenOptions) -> Result<FlatMap> {
    let mut flat = flatten_value(nested, &options.prefix, options.style)?;
    if options.sorted {
        flat.sort_keys();
    }
    Ok(flat)
}

/// Flattens any map or array into a list of `path.value` strings, one per scalar.
///
/// Arrays are always expanded, including arrays of plain numbers or strings.
/// The value is appended with a `.` whatever the style. Without `sorted` the
/// list is in visitation order.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{flatten_all, tree, Style};
///
/// let nested = tree!({"item": {"meh": [1.01, 2], "ok": "ham"}});
/// let flat = flatten_all(&nested, "", Style::Dot, true).unwrap();
///
/// assert_eq!(flat, vec!["item.meh.0.1.01", "item.meh.1.2", "item.ok.ham"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `nested` is a scalar.
pub fn flatten_all(nested: &Value, prefix: &str, style: Style, sorted: bool) -> Result<Vec<String>> {
    debug!(
        "flattening {} to list (style={}, prefix={:?}, sorted={})",
        nested.kind(),
        style,
        prefix,
        sorted
    );
    let mut result = Vec::new();
    flatten_all_into(true, &mut result, nested, prefix, style)?;

    if sorted {
        result.sort();
    }
    Ok(result)
}

/// List variant driven by [`FlattenOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `nested` is a scalar.
pub fn flatten_all_with_options(nested: &Value, options: &FlattenOptions) -> Result<Vec<String>> {
    flatten_all(nested, &options.prefix, options.style, options.sorted)
}

fn flatten_into(top: bool, flat: &mut FlatMap, nested: &Value, prefix: &str, style: Style) -> Result<()> {
    match nested {
        Value::Object(map) => flatten_map(top, flat, map, prefix, style),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let key = encode_key(top, prefix, &i.to_string(), style);
                assign(flat, key, item, style)?;
            }
            Ok(())
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(Error::InvalidInputKind(nested.kind()))
        }
    }
}

fn flatten_map(top: bool, flat: &mut FlatMap, map: &Map, prefix: &str, style: Style) -> Result<()> {
    for (k, v) in map {
        let key = encode_key(top, prefix, k, style);
        assign(flat, key, v, style)?;
    }
    Ok(())
}

fn assign(flat: &mut FlatMap, key: String, value: &Value, style: Style) -> Result<()> {
    match value {
        Value::Object(map) => flatten_map(false, flat, map, &key, style),
        Value::Array(items) if !all_scalars(items) => flatten_into(false, flat, value, &key, style),
        Value::Array(_) | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            trace!("{} <- {}", key, value.kind());
            if flat.insert(key, value.clone()).is_some() {
                trace!("flat key collision, keeping later value");
            }
            Ok(())
        }
    }
}

fn flatten_all_into(
    top: bool,
    result: &mut Vec<String>,
    nested: &Value,
    prefix: &str,
    style: Style,
) -> Result<()> {
    match nested {
        Value::Object(map) => {
            for (k, v) in map {
                let key = encode_key(top, prefix, k, style);
                emit(result, key, v, style)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let key = encode_key(top, prefix, &i.to_string(), style);
                emit(result, key, item, style)?;
            }
            Ok(())
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(Error::InvalidInputKind(nested.kind()))
        }
    }
}

fn emit(result: &mut Vec<String>, key: String, value: &Value, style: Style) -> Result<()> {
    match value {
        Value::Object(_) | Value::Array(_) => flatten_all_into(false, result, value, &key, style),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let entry = format!("{}.{}", key, value);
            trace!("emit {}", entry);
            result.push(entry);
            Ok(())
        }
    }
}
