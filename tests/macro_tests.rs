use slon::{slon, stringify, Map, Value};

#[test]
fn test_slon_macro_null() {
    let value = slon!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_slon_macro_booleans() {
    let true_val = slon!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = slon!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_slon_macro_numbers() {
    let int_val = slon!(42);
    assert_eq!(int_val, Value::Number(42.0));

    let float_val = slon!(3.5);
    assert_eq!(float_val, Value::Number(3.5));

    let negative_val = slon!(-123);
    assert_eq!(negative_val, Value::Number(-123.0));
}

#[test]
fn test_slon_macro_strings() {
    let string_val = slon!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = slon!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_slon_macro_arrays() {
    let empty_array = slon!([]);
    assert_eq!(empty_array, Value::Array(vec![]));

    let mixed_array = slon!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );

    let nested = slon!([[1, 2], [], ["x"]]);
    assert_eq!(stringify(&nested).unwrap(), "[[1 | 2] | [] | ['x']]");
}

#[test]
fn test_slon_macro_objects() {
    let empty = slon!({});
    assert_eq!(empty, Value::Object(Map::new()));

    let obj = slon!({
        "name": "Alice",
        "age": 30,
        "address": {
            "city": "Springfield",
            "zip": "12345"
        },
        "tags": ["a", "b"],
    });

    let map = obj.as_object().unwrap();
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "age", "address", "tags"]);
    assert_eq!(
        stringify(&obj).unwrap(),
        "(name: 'Alice', age: 30, address: (city: 'Springfield', zip: '12345'), tags: ['a' | 'b'])"
    );
}

#[test]
fn test_slon_macro_expressions() {
    let count = 7u8;
    assert_eq!(slon!(count), Value::Number(7.0));

    let names = vec!["x".to_string(), "y".to_string()];
    assert_eq!(
        slon!(names),
        Value::Array(vec![Value::from("x"), Value::from("y")])
    );
}

#[test]
fn test_slon_macro_matches_parse() {
    let built = slon!({
        "id": 1,
        "ok": true,
        "list": [1.5, null]
    });
    let parsed = slon::parse("(id: 1, ok: true, list: [1.5 | null])").unwrap();
    assert_eq!(built, parsed);
}
