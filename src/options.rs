//! Configuration options for flattening.
//!
//! - [`Style`]: how path segments below the top level are joined
//! - [`FlattenOptions`]: prefix, style, ordering and output formatting
//!
//! ## Examples
//!
//! ```rust
//! use flatten_keys::{flatten_str_with_options, FlattenOptions, Style};
//!
//! let options = FlattenOptions::new(Style::Slash).with_prefix("/");
//! let flat = flatten_str_with_options(r#"{"a": {"b": 1}}"#, &options).unwrap();
//! assert_eq!(flat, r#"{"/a/b":1}"#);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator convention for encoded paths.
///
/// There is deliberately no default: every call picks one.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::Style;
///
/// assert_eq!("rails".parse::<Style>().unwrap(), Style::Rails);
/// assert!("colon".parse::<Style>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `a.b.1.c`
    Dot,
    /// `a/b/1/c`
    Slash,
    /// `a[b][1][c]`
    Rails,
}

impl Style {
    /// Returns the lowercase name of this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Dot => "dot",
            Style::Slash => "slash",
            Style::Rails => "rails",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dot" => Ok(Style::Dot),
            "slash" => Ok(Style::Slash),
            "rails" => Ok(Style::Rails),
            _ => Err(crate::Error::UnknownStyle(s.to_string())),
        }
    }
}

/// Configuration for the `*_with_options` entry points.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{FlattenOptions, Style};
///
/// let options = FlattenOptions::new(Style::Dot)
///     .with_prefix("p:")
///     .with_sorted(true);
/// assert_eq!(options.prefix, "p:");
/// assert!(options.sorted);
/// assert!(!options.pretty);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FlattenOptions {
    /// Prepended verbatim to the first segment of every key.
    pub prefix: String,
    pub style: Style,
    /// Sort list output, or the keys of map output.
    pub sorted: bool,
    /// Indent text output. Only the Text API reads this.
    pub pretty: bool,
}

impl FlattenOptions {
    /// Creates options with an empty prefix, unsorted, compact output.
    #[must_use]
    pub fn new(style: Style) -> Self {
        FlattenOptions {
            prefix: String::new(),
            style,
            sorted: false,
            pretty: false,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
