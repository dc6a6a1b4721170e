//! # flatten_keys
//!
//! Flattens arbitrarily nested maps and arrays into a single-level map (or a
//! list of strings) whose keys spell out the path to each leaf.
//!
//! ## Separator Styles
//!
//! | Style | Nested key |
//! |-------|------------|
//! | [`Style::Dot`] | `a.b.1.c` |
//! | [`Style::Slash`] | `a/b/1/c` |
//! | [`Style::Rails`] | `a[b][1][c]` |
//!
//! The first segment never gets a connective, so a prefix such as `"p:"`
//! produces `p:a.b`.
//!
//! ## Quick Start
//!
//! ### Flattening JSON text
//!
//! ```rust
//! use flatten_keys::{flatten_str, Style};
//!
//! let nested = r#"{"one": {"two": [{"x": "2a"}, {"x": "2b"}]}, "side": "value"}"#;
//! let flat = flatten_str(nested, "", Style::Dot).unwrap();
//! assert_eq!(flat, r#"{"one.two.0.x":"2a","one.two.1.x":"2b","side":"value"}"#);
//! ```
//!
//! ### Flattening values
//!
//! ```rust
//! use flatten_keys::{flatten, tree, Style, Value};
//!
//! let nested = tree!({
//!     "a": "b",
//!     "c": {"d": "e", "f": "g"},
//!     "z": 1.4567
//! });
//! let flat = flatten(nested.as_object().unwrap(), "", Style::Rails).unwrap();
//!
//! assert_eq!(flat.get("c[d]"), Some(&Value::from("e")));
//! assert_eq!(flat.get("z"), Some(&Value::from(1.4567)));
//! ```
//!
//! ### Flattening to a list
//!
//! ```rust
//! use flatten_keys::{flatten_all, tree, Style};
//!
//! let nested = tree!([{"foo": 1}, "bar"]);
//! let flat = flatten_all(&nested, "", Style::Dot, true).unwrap();
//! assert_eq!(flat, vec!["0.foo.1", "1.bar"]);
//! ```
//!
//! ### Flattening Rust types
//!
//! ```rust
//! use flatten_keys::{flatten_value, to_value, Style, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Server { host: String, limits: Limits }
//!
//! #[derive(Serialize)]
//! struct Limits { conns: u32 }
//!
//! let server = Server { host: "localhost".into(), limits: Limits { conns: 64 } };
//! let flat = flatten_value(&to_value(&server).unwrap(), "", Style::Slash).unwrap();
//! assert_eq!(flat.get("limits/conns"), Some(&Value::from(64)));
//! ```
//!
//! ## Map vs. list output
//!
//! The map variant keeps arrays of plain strings and numbers whole, storing the
//! array itself under one key. The list variant always expands arrays, one entry
//! per scalar. List output follows visitation order unless `sorted` is set.
//!
//! ## Logging
//!
//! Entry points log at `debug` and each stored leaf at `trace` through the
//! [`log`](https://docs.rs/log) facade. No logger is installed by the library.

pub mod error;
pub mod flatten;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod text;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{
    all_scalars, flatten, flatten_all, flatten_all_with_options, flatten_value,
    flatten_with_options,
};
pub use key::encode_key;
pub use map::{FlatMap, Map};
pub use options::{FlattenOptions, Style};
pub use text::{
    flatten_reader, flatten_slice, flatten_str, flatten_str_with_options, flatten_to_writer,
};
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// Field order follows the serialization order of `T`.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.as_object().unwrap().get("y"), Some(&Value::from(2)));
/// ```
///
/// # Errors
///
/// Returns an error if `T`'s `Serialize` implementation fails or produces a
/// map with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    Ok(Value::from(serde_json::to_value(value)?))
}
