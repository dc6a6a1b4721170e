//! Path segment encoding.

use crate::Style;

/// Appends `segment` to `prefix` according to `style`.
///
/// At the top level the segment is concatenated with no connective, so a
/// caller-supplied prefix runs straight into the first key.
///
/// # Examples
///
/// ```rust
/// use flatten_keys::{encode_key, Style};
///
/// assert_eq!(encode_key(true, "p:", "a", Style::Rails), "p:a");
/// assert_eq!(encode_key(false, "a", "b", Style::Dot), "a.b");
/// assert_eq!(encode_key(false, "a", "b", Style::Slash), "a/b");
/// assert_eq!(encode_key(false, "a", "b", Style::Rails), "a[b]");
/// ```
#[must_use]
pub fn encode_key(top: bool, prefix: &str, segment: &str, style: Style) -> String {
    let mut key = String::with_capacity(prefix.len() + segment.len() + 2);
    key.push_str(prefix);

    if top {
        key.push_str(segment);
        return key;
    }

    match style {
        Style::Dot => {
            key.push('.');
            key.push_str(segment);
        }
        Style::Slash => {
            key.push('/');
            key.push_str(segment);
        }
        Style::Rails => {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        }
    }
    key
}
