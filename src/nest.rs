use serde_json::{Map, Value};

/// Turns slash-separated keys into nested objects.
///
/// `{"A/B/C": 1, "A/B/D": 2, "G/H": 3}` becomes `{"A": {"B": {"C": 1, "D": 2}}, "G": {"H": 3}}`.
/// If a path segment already holds a non-object value, that value is kept and the rest of the
/// key is inserted one level up, next to it.
pub fn nest_slash_keys(data: Map<String, Value>) -> Map<String, Value> {
    let mut nested = Map::new();
    for (key, value) in data {
        insert_path(&mut nested, &key, value);
    }
    nested
}

fn insert_path(map: &mut Map<String, Value>, key: &str, value: Value) {
    let Some((segment, rest)) = key.split_once('/') else {
        map.insert(key.to_string(), value);
        return;
    };
    match map
        .entry(segment.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
    {
        Value::Object(child) => insert_path(child, rest, value),
        _ => insert_path(map, rest, value),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn nests_shared_prefixes() {
        let out = nest_slash_keys(obj(json!({
            "A/B/C": "E",
            "A/B/D": "F",
            "G/H": "J",
            "G/I": "K"
        })));
        assert_eq!(
            Value::Object(out),
            json!({"A": {"B": {"C": "E", "D": "F"}}, "G": {"H": "J", "I": "K"}})
        );
    }

    #[test]
    fn plain_keys_pass_through_in_order() {
        let out = nest_slash_keys(obj(json!({"z": 1, "a": [1, 2], "m": {"x/y": 3}})));
        let keys: Vec<_> = out.keys().cloned().collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(out["m"], json!({"x/y": 3}));
    }

    #[test]
    fn scalar_segment_is_kept() {
        let out = nest_slash_keys(obj(json!({"A": 1, "A/B": 2})));
        assert_eq!(Value::Object(out), json!({"A": 1, "B": 2}));
    }

    #[test]
    fn existing_object_is_extended() {
        let out = nest_slash_keys(obj(json!({"A": {"x": 0}, "A/B": 2})));
        assert_eq!(Value::Object(out), json!({"A": {"x": 0, "B": 2}}));
    }

    #[test]
    fn scalar_in_the_middle_of_a_path_is_kept() {
        let out = nest_slash_keys(obj(json!({"A": {"B": true}, "A/B/C/D": 4, "A/E": 5})));
        assert_eq!(Value::Object(out), json!({"A": {"B": true, "C": {"D": 4}, "E": 5}}));
    }
}
