/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object entries keep the order they are written in, duplicates included.
/// Any other expression goes through [`to_value`](crate::to_value) and turns
/// into `null` if it cannot be represented.
///
/// ```rust
/// use slon::slon;
///
/// let value = slon!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "boss": null
/// });
/// assert_eq!(value.to_string(), "(name: 'Alice', tags: ['a' | 'b'], boss: null)");
/// ```
#[macro_export]
macro_rules! slon {
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
        $crate::Value::Array(vec![$($crate::slon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.push($key.to_string(), $crate::slon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{DateTime, Map, Value};

    #[test]
    fn test_slon_macro_primitives() {
        assert_eq!(slon!(null), Value::Null);
        assert_eq!(slon!(true), Value::Bool(true));
        assert_eq!(slon!(false), Value::Bool(false));
        assert_eq!(slon!(42), Value::Number(42.0));
        assert_eq!(slon!(3.5), Value::Number(3.5));
        assert_eq!(slon!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_slon_macro_arrays() {
        assert_eq!(slon!([]), Value::Array(vec![]));

        let arr = slon!([1, 2, 3]);
        assert_eq!(
            arr,
            Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0)
            ])
        );
    }

    #[test]
    fn test_slon_macro_objects_keep_duplicates() {
        assert_eq!(slon!({}), Value::Object(Map::new()));

        let obj = slon!({
            "a": 1,
            "a": 2
        });
        let map = obj.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_slon_macro_expressions() {
        let dt = DateTime::new(2024, 1, 2, 3, 4, 5, 6);
        assert_eq!(slon!(dt), Value::DateTime(dt));
        assert_eq!(slon!(f64::NAN), Value::Null);
    }
}
