//! JSON in, JSON out.
//!
//! The Text API decodes nested JSON, runs the map variant of the flattener and
//! encodes the flat map back to JSON. Output keys are written in ascending
//! order. Decode and encode failures are returned exactly as `serde_json`
//! reports them.

use crate::error::{Error, Result};
use crate::flatten::flatten;
use crate::{FlatMap, FlattenOptions, Map, Style, Value};
use log::debug;
use std::io;

/// Flattens a JSON object given as text.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{flatten_str, Style};
///
/// let nested = r#"{
///   "one": {"two": ["2a", "2b"]},
///   "side": "value"
/// }"#;
///
/// // Arrays of plain strings stay whole in map output.
/// let flat = flatten_str(nested, "", Style::Dot).unwrap();
/// assert_eq!(flat, r#"{"one.two":["2a","2b"],"side":"value"}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if `nested` is not valid JSON and
/// [`Error::NotAnObject`] if it is valid JSON but not an object.
pub fn flatten_str(nested: &str, prefix: &str, style: Style) -> Result<String> {
    flatten_str_with_options(nested, &FlattenOptions::new(style).with_prefix(prefix))
}

/// Text API driven by [`FlattenOptions`]. `pretty` indents the output.
///
/// # Errors
///
/// See [`flatten_str`].
pub fn flatten_str_with_options(nested: &str, options: &FlattenOptions) -> Result<String> {
    debug!("flattening {} bytes of JSON (style={})", nested.len(), options.style);
    let value: Value = serde_json::from_str(nested)?;
    let flat = flatten_decoded(value, options)?;
    encode(&flat, options.pretty)
}

/// Like [`flatten_str`], for UTF-8 bytes.
///
/// # Errors
///
/// See [`flatten_str`].
pub fn flatten_slice(nested: &[u8], prefix: &str, style: Style) -> Result<String> {
    let options = FlattenOptions::new(style).with_prefix(prefix);
    let value: Value = serde_json::from_slice(nested)?;
    let flat = flatten_decoded(value, &options)?;
    encode(&flat, options.pretty)
}

/// Reads nested JSON from `reader` and returns the flat JSON text.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise see [`flatten_str`].
pub fn flatten_reader<R>(mut reader: R, options: &FlattenOptions) -> Result<String>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    flatten_str_with_options(&string, options)
}

/// Flattens nested JSON text and writes the flat JSON to `writer`.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{flatten_to_writer, FlattenOptions, Style};
///
/// let mut buffer = Vec::new();
/// let options = FlattenOptions::new(Style::Rails);
/// flatten_to_writer(&mut buffer, r#"{"foo": {"jim": "bean"}}"#, &options).unwrap();
/// assert_eq!(buffer, br#"{"foo[jim]":"bean"}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails, otherwise see [`flatten_str`].
pub fn flatten_to_writer<W>(mut writer: W, nested: &str, options: &FlattenOptions) -> Result<()>
where
    W: io::Write,
{
    let flat = flatten_str_with_options(nested, options)?;
    writer
        .write_all(flat.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

fn flatten_decoded(value: Value, options: &FlattenOptions) -> Result<FlatMap> {
    let map: Map = match value {
        Value::Object(map) => map,
        other => return Err(Error::NotAnObject(other.kind())),
    };
    let mut flat = flatten(&map, &options.prefix, options.style)?;
    flat.sort_keys();
    Ok(flat)
}

fn encode(flat: &FlatMap, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(flat)?
    } else {
        serde_json::to_string(flat)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_object_unchanged() {
        assert_eq!(flatten_str(r#"{ "a": "b" }"#, "", Style::Dot).unwrap(), r#"{"a":"b"}"#);
    }

    #[test]
    fn test_deep_nesting_and_scalars() {
        let nested = r#"{ "a": { "b" : { "c" : { "d" : "e" } } }, "number": 1.4567, "bool": true }"#;
        assert_eq!(
            flatten_str(nested, "", Style::Dot).unwrap(),
            r#"{"a.b.c.d":"e","bool":true,"number":1.4567}"#
        );
    }

    #[test]
    fn test_integers_stay_integers() {
        let flat = flatten_str(r#"{"a": {"i": 2, "f": 2.0}}"#, "", Style::Dot).unwrap();
        assert_eq!(flat, r#"{"a.f":2.0,"a.i":2}"#);
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            flatten_str("[1, 2]", "", Style::Dot),
            Err(Error::NotAnObject("array"))
        ));
        assert!(matches!(
            flatten_str("\"text\"", "", Style::Dot),
            Err(Error::NotAnObject("string"))
        ));
    }

    #[test]
    fn test_decode_error_passes_through() {
        let expected = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err().to_string();
        match flatten_str("{\"a\":", "", Style::Dot) {
            Err(Error::Json(e)) => assert_eq!(e.to_string(), expected),
            other => panic!("expected JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_slice_and_reader() {
        let nested = br#"{"x": {"y": null}}"#;
        assert_eq!(flatten_slice(nested, "", Style::Slash).unwrap(), r#"{"x/y":null}"#);

        let options = FlattenOptions::new(Style::Slash);
        assert_eq!(
            flatten_reader(io::Cursor::new(&nested[..]), &options).unwrap(),
            r#"{"x/y":null}"#
        );
    }

    #[test]
    fn test_pretty_output() {
        let options = FlattenOptions::new(Style::Dot).with_pretty(true);
        let flat = flatten_str_with_options(r#"{"a": {"b": 1}}"#, &options).unwrap();
        assert_eq!(flat, "{\n  \"a.b\": 1\n}");
    }
}
