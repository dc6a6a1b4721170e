/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use flatten_keys::{tree, Value};
///
/// let value = tree!({"a": [1, "b", null], "c": {"d": true}});
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! tree {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::tree!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::tree!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Numbers, strings and any other serializable expression
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}
