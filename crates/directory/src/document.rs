use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

/// A schemaless record as returned by a [`Store`](crate::Store), fields
/// already reduced to plain JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            fields: match fields {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }
    /// Decodes into an entry type. The store's document id always wins over
    /// any `id` field stored inside the document.
    pub fn decode<T>(self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        serde_json::from_value(Value::Object(fields))
    }
}

/// Lenient field decoders that turn absent, null or odd values into defaults.
pub(crate) mod lenient {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde_json::Value;

    /// `null` reads as the type's default.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }

    /// Integers, integral floats and numeric strings; anything else is zero.
    pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .unwrap_or_default(),
            Value::String(s) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        })
    }

    /// Strings as-is, numbers and booleans in their JSON form; anything else is empty.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(stringify(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    /// Like [`text`], but absent or unreadable values stay `None`.
    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(stringify(Value::deserialize(deserializer)?))
    }

    fn stringify(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A foreign key; empty strings count as absent.
    pub fn reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(|s| s.filter(|s| !s.is_empty()))
    }
}
