use serde_json::Value;

/// Field names carrying lesson prose, in priority order.
pub const LESSON_FIELDS: [&str; 6] = ["lesson", "leccion", "content", "contenido", "text", "texto"];

/// Field names carrying the exercise or quiz array appended by the producer.
pub const EXERCISE_FIELDS: [&str; 5] = ["exercises", "ejercicios", "quiz", "questions", "preguntas"];

/// The first present field of `names` on an object, or on the first object
/// element of an array that has one.
///
/// `null` and blank strings count as absent.
pub fn find_field<'v>(value: &'v Value, names: &[&str]) -> Option<&'v Value> {
    match value {
        Value::Object(map) => names
            .iter()
            .filter_map(|name| map.get(*name))
            .find(|field| is_present(field)),
        Value::Array(items) => items
            .iter()
            .filter(|item| item.is_object())
            .find_map(|item| find_field(item, names)),
        _ => None,
    }
}

pub fn lesson_field(value: &Value) -> Option<&Value> {
    find_field(value, &LESSON_FIELDS)
}

pub fn exercise_field(value: &Value) -> Option<&Value> {
    find_field(value, &EXERCISE_FIELDS)
}

/// Two-space indented JSON, used when a payload has structure but no prose.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}
