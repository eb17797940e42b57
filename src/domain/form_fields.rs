use serde_json::{Map, Value};

/// The fields of a submitted JSON form.
///
/// A body that is valid JSON but not an object has no fields at all.
/// Field values are read the way a browser form handler would read them:
/// `null`, `false`, `0` and `""` count as absent, other scalars are
/// converted to their string form.
#[derive(Debug, Default)]
pub struct FormFields(Map<String, Value>);

impl FormFields {
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields = match serde_json::from_slice(body)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Ok(Self(fields))
    }

    /// Remove and return the named field, `None` if it is absent or falsy.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name).and_then(to_form_string)
    }
}

fn to_form_string(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => non_empty(Some(s)),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| to_form_string(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

/// `None` for an absent or empty field.
pub fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
